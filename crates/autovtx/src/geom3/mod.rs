//! 3D points, finite segments, and line-line nearest points.
//!
//! Purpose
//! - Provide the numeric building blocks of edge classification: membership of
//!   a point in a finite segment, and the closest approach of two infinite lines.
//! - Keep every comparison on the single fixed tolerance `VTX_PRECISION`.
//!
//! Code cross-refs: `vtx::classify_edge_pair` (the only orchestrating caller).

mod cfg;
mod lines;
mod types;

pub use cfg::{PARALLEL_EPS, VTX_PRECISION};
pub use lines::{
    closest_approach_point, is_coplanar, point_on_segment, Approach, ClosedForm, LineLineNearest,
};
pub use types::{Point3, Segment};
