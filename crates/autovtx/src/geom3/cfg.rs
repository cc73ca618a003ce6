//! Tolerance defaults for edge classification.
//!
//! Policy
//! - Fixed constants, shared by every length and distance comparison. There is
//!   no per-call tolerance on purpose; callers cannot get two answers for one input.

/// Absolute tolerance for point-on-segment and coplanarity checks.
pub const VTX_PRECISION: f64 = 1.0e-5;
/// Lower bound on `sin²` of the angle between two lines before they count as parallel.
///
/// Compared against `|d1 × d2|² / (|d1|² |d2|²)`.
pub const PARALLEL_EPS: f64 = 1.0e-12;
