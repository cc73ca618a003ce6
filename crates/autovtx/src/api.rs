//! Curated surface for integration layers (CLI, Python bindings).
//!
//! Important
//! - Prefer these re-exports over reaching into submodules so that internal
//!   moves stay invisible to the binaries.

// Geometry
pub use crate::geom3::{
    closest_approach_point, is_coplanar, point_on_segment, Approach, ClosedForm, LineLineNearest,
    Point3, Segment, PARALLEL_EPS, VTX_PRECISION,
};
// Classification and decision
pub use crate::vtx::{
    classify_edge_pair, classify_edge_pair_with, closest_endpoint, plan, ClassifyError, Edge,
    EdgePair, Intersection, MeshEdge, VtxPlan,
};
// Seeded inputs
pub use crate::rand3::{EdgePairKind, PairCfg, PairSample, PairSampler, ReplayToken};
