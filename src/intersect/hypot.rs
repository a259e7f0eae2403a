use crate::geometry::Segment;
use crate::math::{cross, Point2, EPSILON};

use super::collinear::{analyze_collinear_segments, coordinate_tolerance};
use super::{IntersectionType, Relation, ScaledSystem, SegmentSolver};

/// Cross-product solver normalized by segment lengths.
///
/// Parallelism is judged relative to the lines' own lengths:
/// `|a x b| <= EPSILON * |a| * |b|`, i.e. the sine of the angle between
/// them is below machine precision. Lengths come from `hypot`.
///
/// In the degenerate branch the connecting vector is tested the same way
/// against both directions. Collinear pairs are resolved by the collinear
/// analyzer: overlapping segments are bounded, disjoint ones unbounded,
/// and the point is the overlap or gap midpoint. Parallel, non-collinear
/// pairs report `NoIntersection`.
///
/// For crossing lines the point is evaluated on whichever segment has the
/// smaller parameter magnitude, which keeps the multiplier small.
///
/// Lengths and cross products come from the scaled vectors of
/// [`ScaledSystem`], so the thresholds cannot underflow to zero.
pub fn intersect(s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> IntersectionType {
    let Some(ScaledSystem { a, b, c, .. }) = ScaledSystem::new(s1, s2) else {
        return IntersectionType::NoIntersection;
    };

    let denominator = cross(&a, &b);

    let lena = a.x.hypot(a.y);
    let lenb = b.x.hypot(b.y);
    let ca = cross(&c, &a);
    let bc = cross(&b, &c);

    if denominator.abs() <= EPSILON * lena * lenb {
        // Parallel, or at least one segment has zero length.
        let lenc = c.x.hypot(c.y);
        if ca.abs() > EPSILON * lenc * lena || bc.abs() > EPSILON * lenc * lenb {
            return IntersectionType::NoIntersection;
        }
        let relations = analyze_collinear_segments(s1, s2, point, coordinate_tolerance(s1, s2));
        return if relations.segments_intersect() {
            IntersectionType::BoundedIntersection
        } else {
            IntersectionType::UnboundedIntersection
        };
    }

    let na = bc / denominator;
    let nb = ca / denominator;
    if let Some(out) = point {
        *out = if na.abs() > nb.abs() {
            s2.point_at(nb)
        } else {
            s1.point_at(na)
        };
    }

    if (0.0..=1.0).contains(&na) && (0.0..=1.0).contains(&nb) {
        IntersectionType::BoundedIntersection
    } else {
        IntersectionType::UnboundedIntersection
    }
}

/// Registry entry for [`intersect`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossHypot;

impl SegmentSolver for CrossHypot {
    fn name(&self) -> &'static str {
        "cross_hypot"
    }

    fn classify(&self, s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> Relation {
        intersect(s1, s2, point).into()
    }
}
