//! Classification of an edge pair.
//!
//! Phases run in order and the first exit wins:
//! 1. shared vertex → `Degenerate` (no floating point touched),
//! 2. closest-approach midpoint and per-edge membership,
//! 3. neither edge contains the point and the lines miss → `NotCoplanar`.

use std::fmt;

use crate::geom3::{point_on_segment, Approach, ClosedForm, LineLineNearest, Point3};

use super::types::Edge;

/// Outcome of `classify_edge_pair`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    /// The edges share at least one vertex; classification was skipped.
    Degenerate,
    /// The lines are skew and the closest-approach point lies on neither edge.
    NotCoplanar,
    /// Intersection (or closest-approach) point with per-edge membership.
    Classified {
        point: Point3,
        on_segment1: bool,
        on_segment2: bool,
    },
}

impl Intersection {
    #[inline]
    pub fn point(&self) -> Option<Point3> {
        match *self {
            Intersection::Classified { point, .. } => Some(point),
            _ => None,
        }
    }

    /// Per input slot, the edge id when that edge's segment contains the point.
    pub fn intersecting_edges<E: Copy>(&self, id1: E, id2: E) -> [Option<E>; 2] {
        match *self {
            Intersection::Classified {
                on_segment1,
                on_segment2,
                ..
            } => [on_segment1.then_some(id1), on_segment2.then_some(id2)],
            _ => [None, None],
        }
    }
}

/// Errors surfaced by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClassifyError {
    /// Parallel or collinear lines: no unique closest-approach point exists.
    UndefinedGeometry,
    /// Input edge (1 or 2) has coincident endpoints.
    ZeroLengthEdge { edge: u8 },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifyError::UndefinedGeometry => {
                write!(f, "lines are parallel or collinear (no unique intersection)")
            }
            ClassifyError::ZeroLengthEdge { edge } => {
                write!(f, "edge {edge} has zero length")
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Classify two edges with the default closed-form nearest-points primitive.
pub fn classify_edge_pair<V, E>(
    edge1: &Edge<V, E>,
    edge2: &Edge<V, E>,
) -> Result<Intersection, ClassifyError>
where
    V: Copy + Eq,
{
    classify_edge_pair_with(&ClosedForm, edge1, edge2)
}

/// Classify two edges using an injected nearest-points primitive.
pub fn classify_edge_pair_with<L, V, E>(
    prim: &L,
    edge1: &Edge<V, E>,
    edge2: &Edge<V, E>,
) -> Result<Intersection, ClassifyError>
where
    L: LineLineNearest + ?Sized,
    V: Copy + Eq,
{
    if shares_vertex(&edge1.verts, &edge2.verts) {
        return Ok(Intersection::Degenerate);
    }
    if edge1.seg.is_zero_length() {
        return Err(ClassifyError::ZeroLengthEdge { edge: 1 });
    }
    if edge2.seg.is_zero_length() {
        return Err(ClassifyError::ZeroLengthEdge { edge: 2 });
    }

    let approach =
        Approach::compute(prim, &edge1.seg, &edge2.seg).ok_or(ClassifyError::UndefinedGeometry)?;
    let point = approach.midpoint();
    let on_segment1 = point_on_segment(point, &edge1.seg);
    let on_segment2 = point_on_segment(point, &edge2.seg);

    if !on_segment1 && !on_segment2 && !approach.is_coplanar() {
        return Ok(Intersection::NotCoplanar);
    }
    Ok(Intersection::Classified {
        point,
        on_segment1,
        on_segment2,
    })
}

/// Fewer than four distinct identities among the four endpoints.
///
/// An edge whose own two vertices coincide also counts.
#[inline]
fn shares_vertex<V: Copy + Eq>(v1: &[V; 2], v2: &[V; 2]) -> bool {
    let all = [v1[0], v1[1], v2[0], v2[1]];
    (0..4).any(|i| (i + 1..4).any(|j| all[i] == all[j]))
}

#[cfg(test)]
mod tests {
    use super::shares_vertex;

    #[test]
    fn shares_vertex_counts_distinct_ids() {
        assert!(!shares_vertex(&[0, 1], &[2, 3]));
        assert!(shares_vertex(&[0, 1], &[1, 3]));
        assert!(shares_vertex(&[0, 1], &[3, 0]));
        assert!(shares_vertex(&[0, 1], &[0, 1]));
        // Repeated vertex inside one edge.
        assert!(shares_vertex(&[4, 4], &[2, 3]));
        assert!(shares_vertex(&[0, 1], &[7, 7]));
    }
}
