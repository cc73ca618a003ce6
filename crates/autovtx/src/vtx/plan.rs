//! VTX decision: which weld/slice/extend case a classified pair calls for.
//!
//! - both edges contain the point → `Slice` (X shape),
//! - one edge contains it → `Extend` (T shape; the other edge grows to meet it),
//! - neither, but the lines meet → `Weld` (V shape; both edges grow to the point).
//!
//! Only the decision lives here. Mesh mutation belongs to the host.

use crate::geom3::Point3;

use super::classify::Intersection;
use super::types::Edge;

/// The VTX case for a classified edge pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VtxPlan<V, E> {
    /// Split both edges at `point`.
    Slice { point: Point3, edges: [E; 2] },
    /// Split `target` at `point` and extend `stem` from `stem_vertex` to it.
    Extend {
        point: Point3,
        target: E,
        stem: E,
        stem_vertex: V,
    },
    /// Move the nearest vertex of each edge onto `point`.
    Weld { point: Point3, vertices: [V; 2] },
}

impl<V, E> VtxPlan<V, E> {
    #[inline]
    pub fn point(&self) -> Point3 {
        match *self {
            VtxPlan::Slice { point, .. }
            | VtxPlan::Extend { point, .. }
            | VtxPlan::Weld { point, .. } => point,
        }
    }
}

/// Vertex of `edge` nearest to `p`; on a tie the second vertex wins.
#[inline]
pub fn closest_endpoint<V: Copy, E>(p: Point3, edge: &Edge<V, E>) -> V {
    if (edge.seg.a - p).norm() < (edge.seg.b - p).norm() {
        edge.verts[0]
    } else {
        edge.verts[1]
    }
}

/// Decide the VTX case; `None` for `Degenerate` and `NotCoplanar`.
///
/// `edge1`/`edge2` must be the pair `result` was computed from, in the same order.
pub fn plan<V: Copy, E: Copy>(
    result: &Intersection,
    edge1: &Edge<V, E>,
    edge2: &Edge<V, E>,
) -> Option<VtxPlan<V, E>> {
    let Intersection::Classified {
        point,
        on_segment1,
        on_segment2,
    } = *result
    else {
        return None;
    };
    let plan = match (on_segment1, on_segment2) {
        (true, true) => VtxPlan::Slice {
            point,
            edges: [edge1.id, edge2.id],
        },
        (true, false) => VtxPlan::Extend {
            point,
            target: edge1.id,
            stem: edge2.id,
            stem_vertex: closest_endpoint(point, edge2),
        },
        (false, true) => VtxPlan::Extend {
            point,
            target: edge2.id,
            stem: edge1.id,
            stem_vertex: closest_endpoint(point, edge1),
        },
        (false, false) => VtxPlan::Weld {
            point,
            vertices: [closest_endpoint(point, edge1), closest_endpoint(point, edge2)],
        },
    };
    Some(plan)
}
