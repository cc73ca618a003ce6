//! Edge-pair classification and the VTX (weld/slice/extend) decision.
//!
//! Purpose
//! - `classify_edge_pair`: decide, for two mesh edges, whether they share a
//!   vertex, are skew, or meet at a point (and which finite edges contain it).
//! - `plan`: turn a classified pair into the VTX case the host should apply.
//! - `EdgePair::from_selection`: the host-side precondition (exactly two
//!   visible selected edges), captured as an explicit snapshot.
//!
//! Why this design
//! - Pure value-in/value-out; the nearest-points primitive is injected via
//!   `geom3::LineLineNearest` so the decision logic is testable on its own.
//! - Expected configurations (shared vertex, skew) are result variants; only
//!   undefined geometry and broken input are errors.
//!
//! Code cross-refs: `geom3::{point_on_segment, Approach, ClosedForm}`.

mod classify;
mod plan;
mod selection;
mod types;

pub use classify::{classify_edge_pair, classify_edge_pair_with, ClassifyError, Intersection};
pub use plan::{closest_endpoint, plan, VtxPlan};
pub use selection::{EdgePair, MeshEdge};
pub use types::Edge;
