//! Cramer's-rule solvers after Antonio's "Faster Line Segment Intersection"
//! (Graphics Gems III).
//!
//! With `a = p2 - p1`, `b = q1 - q2` and `c = p1 - q1`, the parameters of the
//! intersection along each segment are ratios of 2x2 determinants sharing
//! the denominator `a.y * b.x - a.x * b.y`. Both solvers work on the
//! power-of-two scaled vectors of [`ScaledSystem`].

use crate::geometry::Segment;
use crate::math::{find_tolerance, robust_fuzzy_compare, Point2};

use super::{outside_unit_interval, IntersectionType, Relation, ScaledSystem, SegmentSolver};

/// Baseline: rejects only an exactly-zero denominator, or non-finite input.
///
/// Near-parallel pairs slip past the exact test and produce huge,
/// ill-conditioned parameters. Kept for comparison.
#[allow(clippy::float_cmp)]
pub fn intersect_baseline(
    s1: &Segment,
    s2: &Segment,
    point: Option<&mut Point2>,
) -> IntersectionType {
    let Some(ScaledSystem { a, b, c, .. }) = ScaledSystem::new(s1, s2) else {
        return IntersectionType::NoIntersection;
    };

    let denominator = a.y * b.x - a.x * b.y;
    if denominator == 0.0 {
        return IntersectionType::NoIntersection;
    }

    let reciprocal = 1.0 / denominator;
    let na = (b.y * c.x - b.x * c.y) * reciprocal;
    if let Some(out) = point {
        *out = s1.point_at(na);
    }

    if !(0.0..=1.0).contains(&na) {
        return IntersectionType::UnboundedIntersection;
    }

    let nb = (a.x * c.y - a.y * c.x) * reciprocal;
    if !(0.0..=1.0).contains(&nb) {
        return IntersectionType::UnboundedIntersection;
    }

    IntersectionType::BoundedIntersection
}

/// Tolerance-aware variant of [`intersect_baseline`].
///
/// Parallelism is detected by comparing the two products that make up the
/// denominator with [`robust_fuzzy_compare`] under a scale-aware tolerance,
/// instead of testing their difference against zero. Bounds are checked on
/// the un-divided numerators, so the only division is for the output point.
pub fn intersect_tolerant(
    s1: &Segment,
    s2: &Segment,
    point: Option<&mut Point2>,
) -> IntersectionType {
    let Some(ScaledSystem { a, b, c, .. }) = ScaledSystem::new(s1, s2) else {
        return IntersectionType::NoIntersection;
    };

    let d1 = a.y * b.x;
    let d2 = a.x * b.y;

    if robust_fuzzy_compare(d1, d2, find_tolerance(&a, &b)) {
        return IntersectionType::NoIntersection;
    }

    let denominator = d1 - d2;
    let nna = b.y * c.x - b.x * c.y;
    if let Some(out) = point {
        *out = s1.point_at(nna / denominator);
    }

    if outside_unit_interval(nna, denominator) {
        return IntersectionType::UnboundedIntersection;
    }

    let nnb = a.x * c.y - a.y * c.x;
    if outside_unit_interval(nnb, denominator) {
        return IntersectionType::UnboundedIntersection;
    }

    IntersectionType::BoundedIntersection
}

/// Registry entry for [`intersect_baseline`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CramerBaseline;

impl SegmentSolver for CramerBaseline {
    fn name(&self) -> &'static str {
        "cramer_baseline"
    }

    fn classify(&self, s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> Relation {
        intersect_baseline(s1, s2, point).into()
    }
}

/// Registry entry for [`intersect_tolerant`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CramerTolerant;

impl SegmentSolver for CramerTolerant {
    fn name(&self) -> &'static str {
        "cramer_tolerant"
    }

    fn classify(&self, s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> Relation {
        intersect_tolerant(s1, s2, point).into()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::nan_point;

    fn bounded_pair() -> (Segment, Segment) {
        (
            Segment::from_coords(1.0, 1.0, 5.0, 5.0),
            Segment::from_coords(0.0, 4.0, 5.0, 4.0),
        )
    }

    #[test]
    fn baseline_bounded_point() {
        let (s1, s2) = bounded_pair();
        let mut p = nan_point();
        let kind = intersect_baseline(&s1, &s2, Some(&mut p));
        assert_eq!(kind, IntersectionType::BoundedIntersection);
        assert_abs_diff_eq!(p.x, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn tolerant_bounded_point() {
        let (s1, s2) = bounded_pair();
        let mut p = nan_point();
        let kind = intersect_tolerant(&s1, &s2, Some(&mut p));
        assert_eq!(kind, IntersectionType::BoundedIntersection);
        assert_abs_diff_eq!(p.x, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn unbounded_when_outside_second_segment() {
        let s1 = Segment::from_coords(1.0, 1.0, 5.0, 5.0);
        let s2 = Segment::from_coords(0.0, 4.0, 3.0, 4.0);
        assert_eq!(
            intersect_baseline(&s1, &s2, None),
            IntersectionType::UnboundedIntersection
        );
        assert_eq!(
            intersect_tolerant(&s1, &s2, None),
            IntersectionType::UnboundedIntersection
        );
    }

    #[test]
    fn parallel_is_no_intersection() {
        let s1 = Segment::from_coords(1.0, 1.0, 3.0, 4.0);
        let s2 = Segment::from_coords(5.0, 6.0, 7.0, 9.0);
        let mut p = nan_point();
        assert_eq!(
            intersect_baseline(&s1, &s2, Some(&mut p)),
            IntersectionType::NoIntersection
        );
        assert_eq!(
            intersect_tolerant(&s1, &s2, Some(&mut p)),
            IntersectionType::NoIntersection
        );
        assert!(p.x.is_nan() && p.y.is_nan());
    }

    #[test]
    fn tolerant_catches_rounded_parallel() {
        // Products differ only in the last bits, so the exact test misses it.
        let s1 = Segment::from_coords(0.0, 0.0, 0.1, 0.3);
        let s2 = Segment::from_coords(1.0, 0.0, 1.1, 0.30000000000000004);
        assert_eq!(
            intersect_tolerant(&s1, &s2, None),
            IntersectionType::NoIntersection
        );
    }

    #[test]
    fn infinite_input_leaves_point_untouched() {
        let s1 = Segment::from_coords(0.0, 0.0, f64::INFINITY, 1.0);
        let s2 = Segment::from_coords(0.0, 1.0, 1.0, 0.0);
        let mut p = Point2::new(7.0, 7.0);
        assert_eq!(
            intersect_baseline(&s1, &s2, Some(&mut p)),
            IntersectionType::NoIntersection
        );
        assert_eq!(
            intersect_tolerant(&s1, &s2, Some(&mut p)),
            IntersectionType::NoIntersection
        );
        assert_eq!(p, Point2::new(7.0, 7.0));
    }

    #[test]
    fn nan_input_is_no_intersection() {
        let s1 = Segment::from_coords(f64::NAN, 0.0, 1.0, 1.0);
        let s2 = Segment::from_coords(0.0, 1.0, 1.0, 0.0);
        assert_eq!(
            intersect_baseline(&s1, &s2, None),
            IntersectionType::NoIntersection
        );
        assert_eq!(
            intersect_tolerant(&s1, &s2, None),
            IntersectionType::NoIntersection
        );
    }

    #[test]
    fn zero_length_is_no_intersection() {
        let s1 = Segment::from_coords(2.0, 2.0, 2.0, 2.0);
        let s2 = Segment::from_coords(0.0, 0.0, 4.0, 4.0);
        assert_eq!(
            intersect_baseline(&s1, &s2, None),
            IntersectionType::NoIntersection
        );
        assert_eq!(
            intersect_tolerant(&s1, &s2, None),
            IntersectionType::NoIntersection
        );
    }
}
