use crate::geometry::Segment;
use crate::math::{Point2, EPSILON};

use super::{outside_unit_interval, IntersectionType, Relation, ScaledSystem, SegmentSolver};

/// Multiple of `EPSILON * |a|^2` below which the denominator counts as zero.
const TOLERANCE_FACTOR: f64 = 1000.0;

/// Cramer's-rule solver with a length-scaled parallel test.
///
/// The denominator is compared against `1000 * EPSILON * |a|^2`, where `a`
/// is the first segment's direction. Collinear pairs are resolved by
/// projecting the second segment's endpoints onto `a` with dot products,
/// which yields the overlap or gap midpoint directly as a parameter on the
/// first segment.
///
/// A first segment whose direction vanishes at the working scale cannot
/// anchor the projection, so the roles of the segments are exchanged; two
/// such segments are compared as points. A point that cannot be
/// represented makes the result `NoIntersection`.
pub fn intersect(s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> IntersectionType {
    match locate(s1, s2) {
        Some((at, kind)) if at.x.is_finite() && at.y.is_finite() => {
            if let Some(out) = point {
                *out = at;
            }
            kind
        }
        _ => IntersectionType::NoIntersection,
    }
}

#[allow(clippy::float_cmp)]
fn locate(s1: &Segment, s2: &Segment) -> Option<(Point2, IntersectionType)> {
    let system = ScaledSystem::new(s1, s2)?;

    match (system.a.norm_squared() > 0.0, system.b.norm_squared() > 0.0) {
        (true, _) => solve(s1, s2, &system),
        (false, true) => solve(s2, s1, &system.swapped()),
        (false, false) => {
            let kind = if s1.p1 == s2.p1 {
                IntersectionType::BoundedIntersection
            } else {
                IntersectionType::UnboundedIntersection
            };
            Some((Segment::new(s1.p1, s2.p1).midpoint(), kind))
        }
    }
}

/// Intersection of `s1` and `s2`, anchored on `s1`, whose direction must
/// not vanish in `system`. `None` means no intersection.
fn solve(s1: &Segment, s2: &Segment, system: &ScaledSystem) -> Option<(Point2, IntersectionType)> {
    let ScaledSystem { a, b, c, .. } = *system;

    let length = a.norm_squared();
    let epsilon = TOLERANCE_FACTOR * length * EPSILON;
    let denominator = a.y * b.x - a.x * b.y;

    if denominator.abs() <= epsilon {
        let r = a.y * c.x - a.x * c.y;
        if r.abs() > epsilon {
            return None;
        }
        return Some(resolve_collinear(s1, s2, system));
    }

    let na = b.y * c.x - b.x * c.y;
    let nb = a.x * c.y - a.y * c.x;
    let outside = outside_unit_interval(na, denominator) || outside_unit_interval(nb, denominator);
    let kind = if outside {
        IntersectionType::UnboundedIntersection
    } else {
        IntersectionType::BoundedIntersection
    };
    Some((s1.point_at(na / denominator), kind))
}

/// Classifies collinear segments by projecting `s2` onto `s1`.
///
/// Projections are scaled by `length = |a|^2`, so `s1` spans `[0, length]`.
fn resolve_collinear(
    s1: &Segment,
    s2: &Segment,
    system: &ScaledSystem,
) -> (Point2, IntersectionType) {
    let a = system.a;
    let length = a.norm_squared();
    let n1 = -a.dot(&system.c);
    let n2 = a.dot(&system.rescale_vector(&(s2.p2 - s1.p1)));
    let (lo, hi) = if n1 <= n2 { (n1, n2) } else { (n2, n1) };

    let (mid, kind) = if hi < 0.0 {
        (0.5 * hi, IntersectionType::UnboundedIntersection)
    } else if lo > length {
        (0.5 * (length + lo), IntersectionType::UnboundedIntersection)
    } else {
        (
            0.5 * (lo.max(0.0) + hi.min(length)),
            IntersectionType::BoundedIntersection,
        )
    };

    (s1.point_at(mid / length), kind)
}

/// Registry entry for [`intersect`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CramerStabilized;

impl SegmentSolver for CramerStabilized {
    fn name(&self) -> &'static str {
        "cramer_stabilized"
    }

    fn classify(&self, s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> Relation {
        intersect(s1, s2, point).into()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::nan_point;

    fn run(coords: [f64; 8]) -> (IntersectionType, Point2) {
        let s1 = Segment::from_coords(coords[0], coords[1], coords[2], coords[3]);
        let s2 = Segment::from_coords(coords[4], coords[5], coords[6], coords[7]);
        let mut p = nan_point();
        (intersect(&s1, &s2, Some(&mut p)), p)
    }

    #[test]
    fn bounded_crossing() {
        let (kind, p) = run([1.0, 1.0, 5.0, 5.0, 0.0, 4.0, 5.0, 4.0]);
        assert_eq!(kind, IntersectionType::BoundedIntersection);
        assert_abs_diff_eq!(p.x, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_is_no_intersection() {
        let (kind, _) = run([1.0, 1.0, 3.0, 4.0, 5.0, 6.0, 7.0, 9.0]);
        assert_eq!(kind, IntersectionType::NoIntersection);
    }

    #[test]
    fn collinear_cases() {
        let (gap_after, p) = run([0.0, 0.0, 4.0, 3.0, 8.0, 6.0, 10.0, 7.5]);
        assert_eq!(gap_after, IntersectionType::UnboundedIntersection);
        assert_abs_diff_eq!(p.x, 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 4.5, epsilon = 1e-12);

        let (gap_before, q) = run([8.0, 6.0, 10.0, 7.5, 0.0, 0.0, 4.0, 3.0]);
        assert_eq!(gap_before, IntersectionType::UnboundedIntersection);
        assert_abs_diff_eq!(q.x, 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(q.y, 4.5, epsilon = 1e-12);

        let (touching, r) = run([0.0, 0.0, 4.0, 3.0, 4.0, 3.0, 10.0, 7.5]);
        assert_eq!(touching, IntersectionType::BoundedIntersection);
        assert_abs_diff_eq!(r.x, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_overlap_beyond_first_end() {
        // The second segment starts inside the first and runs past its end.
        let (kind, p) = run([0.0, 0.0, 4.0, 0.0, 10.0, 0.0, 2.0, 0.0]);
        assert_eq!(kind, IntersectionType::BoundedIntersection);
        assert_abs_diff_eq!(p.x, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn covering_segment() {
        let (kind, p) = run([2.0, 1.0, 1.0, 1.0, -1.0, 1.0, 4.0, 1.0]);
        assert_eq!(kind, IntersectionType::BoundedIntersection);
        assert_abs_diff_eq!(p.x, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_first_segment_is_swapped() {
        let (kind, p) = run([2.0, 2.0, 2.0, 2.0, 0.0, 0.0, 4.0, 4.0]);
        assert_eq!(kind, IntersectionType::BoundedIntersection);
        assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn two_points() {
        let (same, _) = run([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(same, IntersectionType::BoundedIntersection);
        let (apart, p) = run([0.0, 0.0, 0.0, 0.0, 2.0, 0.0, 2.0, 0.0]);
        assert_eq!(apart, IntersectionType::UnboundedIntersection);
        assert_eq!(p, Point2::new(1.0, 0.0));
    }

    #[test]
    fn underflowing_lengths_are_not_points() {
        // |a|^2 and |b|^2 are both below the smallest subnormal, yet neither
        // segment is a point.
        let (kind, p) = run([0.0, 0.0, 1e-170, 0.0, 0.0, 1e-170, 1e-170, 0.0]);
        assert_eq!(kind, IntersectionType::BoundedIntersection);
        assert_abs_diff_eq!(p.x, 1e-170, epsilon = 1e-182);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-182);

        let (reversed, q) = run([0.0, 1e-170, 1e-170, 0.0, 0.0, 0.0, 1e-170, 0.0]);
        assert_eq!(reversed, IntersectionType::BoundedIntersection);
        assert_abs_diff_eq!(q.x, 1e-170, epsilon = 1e-182);
    }

    #[test]
    fn zero_denominator_with_subnormal_length() {
        let (kind, p) = run([0.0, 0.0, 1e-160, 0.0, 0.0, 1e-160, 1e-160, 1e-160]);
        assert_eq!(kind, IntersectionType::NoIntersection);
        assert!(p.x.is_nan() && p.y.is_nan());

        let (collinear, q) = run([0.0, 0.0, 1e-160, 0.0, 3e-160, 0.0, 2e-160, 0.0]);
        assert_eq!(collinear, IntersectionType::UnboundedIntersection);
        assert_abs_diff_eq!(q.x, 1.5e-160, epsilon = 1e-172);
        assert_abs_diff_eq!(q.y, 0.0);
    }

    #[test]
    fn nan_input() {
        let mut p = Point2::new(0.5, 0.5);
        let s1 = Segment::from_coords(0.0, 0.0, 1.0, 1.0);
        let s2 = Segment::from_coords(0.0, f64::NAN, 1.0, 0.0);
        assert_eq!(
            intersect(&s1, &s2, Some(&mut p)),
            IntersectionType::NoIntersection
        );
        let point = Segment::from_coords(0.0, 0.0, 0.0, 0.0);
        assert_eq!(
            intersect(&point, &s2, Some(&mut p)),
            IntersectionType::NoIntersection
        );
        assert_eq!(p, Point2::new(0.5, 0.5));
    }
}
