//! PyO3 bindings for the `autovtx` classifier.
//!
//! Notes
//! - Keep bindings thin and predictable: tuples in, tuples and strings out.
//!   The host add-on owns selection polling, warnings, and mesh edits.
//! - Vertex and edge ids are the host's integer indices.

use pyo3::prelude::*;

mod classify;
mod common;

#[pymodule]
fn autovtx_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("VTX_PRECISION", autovtx::VTX_PRECISION)?;
    m.add("VERSION", autovtx::VERSION)?;
    classify::register(m)?;
    Ok(())
}
