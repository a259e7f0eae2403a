use std::fmt;

use crate::math::{Point2, Vector2};

/// A finite, directed line segment from `p1` to `p2`.
///
/// The parametric form is `P(t) = p1 + t * (p2 - p1)`, with `t` in `[0, 1]`
/// covering the segment itself. Endpoint order fixes the parameterization
/// but not the geometric relation to another segment.
///
/// Zero-length segments are valid values. Solvers treat them as degenerate
/// input rather than as an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: Point2,
    pub p2: Point2,
}

impl Segment {
    /// Creates a segment from two endpoints.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    /// Creates a segment from raw endpoint coordinates.
    #[must_use]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: Point2::new(x1, y1),
            p2: Point2::new(x2, y2),
        }
    }

    /// Horizontal extent `p2.x - p1.x`.
    #[must_use]
    pub fn dx(&self) -> f64 {
        self.p2.x - self.p1.x
    }

    /// Vertical extent `p2.y - p1.y`.
    #[must_use]
    pub fn dy(&self) -> f64 {
        self.p2.y - self.p1.y
    }

    /// Direction vector `p2 - p1` (not normalized).
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        Vector2::new(self.dx(), self.dy())
    }

    /// Point at parameter `t` on the segment's supporting line.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.p1 + self.direction() * t
    }

    /// Point halfway between the endpoints.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.p1, &self.p2)
    }

    /// The same segment with its endpoints swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            p1: self.p2,
            p2: self.p1,
        }
    }

    /// Returns `true` if all four coordinates are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coords().iter().all(|c| c.is_finite())
    }

    /// Returns `true` if both endpoints are exactly equal.
    ///
    /// No tolerance is applied: at sub-epsilon coordinate scales a fuzzy
    /// test would report every segment as degenerate.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    /// The four coordinates in `[x1, y1, x2, y2]` order.
    #[must_use]
    pub fn coords(&self) -> [f64; 4] {
        [self.p1.x, self.p1.y, self.p2.x, self.p2.y]
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{({}, {}), ({}, {})}}",
            self.p1.x, self.p1.y, self.p2.x, self.p2.y
        )
    }
}
