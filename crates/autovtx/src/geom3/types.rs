//! Core 3D value types.

use nalgebra::Vector3;

/// A point (or direction) in R³.
pub type Point3 = Vector3<f64>;

/// Finite segment `[a, b]`.
///
/// Invariants:
/// - `a != b`; zero-length segments are rejected by the classifier.
/// - Endpoint order matters for equality, not for geometric meaning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub a: Point3,
    pub b: Point3,
}

impl Segment {
    #[inline]
    pub fn new(a: Point3, b: Point3) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn from_coords(a: [f64; 3], b: [f64; 3]) -> Self {
        Self {
            a: Point3::from(a),
            b: Point3::from(b),
        }
    }
    /// Direction `b - a` (not normalized).
    #[inline]
    pub fn direction(&self) -> Point3 {
        self.b - self.a
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
    #[inline]
    pub fn midpoint(&self) -> Point3 {
        (self.a + self.b) * 0.5
    }
    /// True when both endpoints coincide exactly.
    #[inline]
    pub fn is_zero_length(&self) -> bool {
        self.direction().norm_squared() == 0.0
    }
    /// Point on the supporting line at parameter `t` (`t = 0 → a`, `t = 1 → b`).
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.a + self.direction() * t
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            a: self.b,
            b: self.a,
        }
    }
}
