//! Edge-pair intersection classifier for the autoVTX mesh tool.
//!
//! Given two selected mesh edges, decide whether their lines meet, where they
//! meet, and which finite edges contain that point. The host editor owns the
//! mesh and performs the weld/slice/extend; this crate only decides.
//!
//! Layout
//! - `geom3`: points, segments, tolerances, and the line-line nearest-points primitive.
//! - `vtx`: the classification procedure, the VTX decision, and host selection snapshots.
//! - `rand3`: seeded edge-pair generators for tests and benchmarks.
//!
//! API Policy
//! - Only `api` and `prelude` are intended as import surfaces for callers
//!   (CLI, Python bindings). Everything else may move between modules.

pub mod api;
pub mod geom3;
pub mod rand3;
pub mod vtx;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom3::{Point3, Segment, VTX_PRECISION};
pub use vtx::{classify_edge_pair, ClassifyError, Edge, Intersection};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom3::{
        closest_approach_point, is_coplanar, point_on_segment, ClosedForm, LineLineNearest,
        Point3, Segment, VTX_PRECISION,
    };
    pub use crate::vtx::{
        classify_edge_pair, classify_edge_pair_with, closest_endpoint, plan, ClassifyError, Edge,
        EdgePair, Intersection, MeshEdge, VtxPlan,
    };
}
