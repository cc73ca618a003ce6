//! Host-facing edge value: identity plus geometry.

use crate::geom3::{Point3, Segment};

/// One mesh edge as seen by the classifier.
///
/// - `id` names the edge in the host mesh (reporting only).
/// - `verts` are the stable identities of its two vertices (degenerate check only).
/// - `seg` is the geometry; `seg.a` belongs to `verts[0]`, `seg.b` to `verts[1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge<V, E> {
    pub id: E,
    pub verts: [V; 2],
    pub seg: Segment,
}

impl<V: Copy, E: Copy> Edge<V, E> {
    #[inline]
    pub fn new(id: E, verts: [V; 2], seg: Segment) -> Self {
        Self { id, verts, seg }
    }
    #[inline]
    pub fn from_coords(id: E, verts: [V; 2], a: [f64; 3], b: [f64; 3]) -> Self {
        Self::new(id, verts, Segment::from_coords(a, b))
    }
    /// Endpoint coordinates in vertex order.
    #[inline]
    pub fn coords(&self) -> [Point3; 2] {
        [self.seg.a, self.seg.b]
    }
}
