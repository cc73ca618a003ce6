//! Classification bindings.

use crate::common::{edge_from_py, plan_to_py, result_to_py, PyEdge, PyResultTuple, PyVec3};
use autovtx::api::{EdgePair, MeshEdge};
use pyo3::prelude::*;

/// Classify two edges: `(status, point, on_segment1, on_segment2)`.
#[pyfunction]
pub fn classify_edge_pair(edge1: PyEdge, edge2: PyEdge) -> PyResult<PyResultTuple> {
    let pair = EdgePair::new(edge_from_py(edge1), edge_from_py(edge2));
    result_to_py(pair.classify())
}

/// Pick the two active edges from `(edge, selected, hidden)` rows; `None` unless exactly two.
#[pyfunction]
pub fn select_edge_pair(edges: Vec<(PyEdge, bool, bool)>) -> Option<(u64, u64)> {
    let pair = EdgePair::from_selection(edges.into_iter().map(|(edge, selected, hidden)| {
        MeshEdge {
            edge: edge_from_py(edge),
            selected,
            hidden,
        }
    }))?;
    let [a, b] = pair.ids();
    Some((a, b))
}

/// VTX decision for two edges: `(case, point, ids)`, or `None` when no case applies.
#[pyfunction]
pub fn vtx_plan(edge1: PyEdge, edge2: PyEdge) -> PyResult<Option<(&'static str, PyVec3, Vec<u64>)>> {
    let pair = EdgePair::new(edge_from_py(edge1), edge_from_py(edge2));
    match pair.classify() {
        Ok(result) => Ok(pair.plan(&result).map(plan_to_py)),
        Err(err) => result_to_py(Err(err)).map(|_| None),
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify_edge_pair, m)?)?;
    m.add_function(wrap_pyfunction!(select_edge_pair, m)?)?;
    m.add_function(wrap_pyfunction!(vtx_plan, m)?)?;
    Ok(())
}
