//! Point-on-segment membership and the closest approach of two lines.
//!
//! - `point_on_segment`: distance-sum test against `VTX_PRECISION`.
//! - `LineLineNearest`: injectable nearest-points primitive; `ClosedForm` is the default.
//! - `Approach`: the two nearest points, with the midpoint and the gap derived from them.

use super::cfg::{PARALLEL_EPS, VTX_PRECISION};
use super::types::{Point3, Segment};

/// True iff `p` lies on the finite segment `edge` within `VTX_PRECISION`.
///
/// For `p` between the endpoints, `|A-p| + |p-B| = |A-B|`; any point off the
/// segment (or past an endpoint) makes the sum strictly larger.
/// Pre: `edge` is not zero-length.
#[inline]
pub fn point_on_segment(p: Point3, edge: &Segment) -> bool {
    let eps = edge.length() - (p - edge.b).norm() - (edge.a - p).norm();
    eps.abs() < VTX_PRECISION
}

/// Nearest points between two infinite lines, each given by two points.
///
/// Implementations return `None` when the pair is undefined (parallel or
/// collinear lines, zero-length input). The first point lies on `l1`, the
/// second on `l2`.
pub trait LineLineNearest {
    fn nearest_points(&self, l1: &Segment, l2: &Segment) -> Option<(Point3, Point3)>;
}

/// Closed-form least-squares solve of `min |a1 + s d1 - (a2 + t d2)|`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosedForm;

impl LineLineNearest for ClosedForm {
    fn nearest_points(&self, l1: &Segment, l2: &Segment) -> Option<(Point3, Point3)> {
        let d1 = l1.direction();
        let d2 = l2.direction();
        let r = l1.a - l2.a;
        let a = d1.dot(&d1);
        let e = d2.dot(&d2);
        let b = d1.dot(&d2);
        let c = d1.dot(&r);
        let f = d2.dot(&r);
        // a e - b² = |d1 × d2|²; compare relative to |d1|²|d2|² so scale drops out.
        let denom = a * e - b * b;
        if !(denom > PARALLEL_EPS * a * e) {
            return None;
        }
        let s = (b * f - c * e) / denom;
        let t = (a * f - b * c) / denom;
        let q1 = l1.at(s);
        let q2 = l2.at(t);
        if !(q1.iter().chain(q2.iter()).all(|x| x.is_finite())) {
            return None;
        }
        Some((q1, q2))
    }
}

/// Closest approach of two lines: `q1` on the first, `q2` on the second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Approach {
    pub q1: Point3,
    pub q2: Point3,
}

impl Approach {
    /// Query `prim` once; `None` if the primitive reports undefined geometry.
    #[inline]
    pub fn compute<L: LineLineNearest + ?Sized>(
        prim: &L,
        edge1: &Segment,
        edge2: &Segment,
    ) -> Option<Self> {
        prim.nearest_points(edge1, edge2)
            .map(|(q1, q2)| Self { q1, q2 })
    }
    /// Midpoint of the shortest connecting segment; the intersection point when the lines meet.
    #[inline]
    pub fn midpoint(&self) -> Point3 {
        (self.q1 + self.q2) / 2.0
    }
    /// Length of the shortest connecting segment.
    #[inline]
    pub fn gap(&self) -> f64 {
        (self.q1 - self.q2).norm()
    }
    /// Lines meet within `VTX_PRECISION` (coplanar and intersecting).
    #[inline]
    pub fn is_coplanar(&self) -> bool {
        self.gap() < VTX_PRECISION
    }
}

/// Midpoint of the closest approach of the lines through `edge1` and `edge2`.
///
/// Returns `None` for parallel or collinear lines.
pub fn closest_approach_point(edge1: &Segment, edge2: &Segment) -> Option<Point3> {
    Approach::compute(&ClosedForm, edge1, edge2).map(|ap| ap.midpoint())
}

/// Whether the lines through `edge1` and `edge2` meet within `VTX_PRECISION`.
///
/// Returns `None` for parallel or collinear lines.
pub fn is_coplanar(edge1: &Segment, edge2: &Segment) -> Option<bool> {
    Approach::compute(&ClosedForm, edge1, edge2).map(|ap| ap.is_coplanar())
}
