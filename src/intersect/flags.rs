use crate::geometry::Segment;
use crate::math::{find_tolerance, robust_fuzzy_compare, Point2};

use super::collinear::{analyze_collinear_segments, coordinate_tolerance, representative_point};
use super::{outside_unit_interval, Relation, ScaledSystem, SegmentRelations, SegmentSolver};

/// Flag-based classifier built on the tolerance-aware Cramer algebra.
///
/// Distinguishes parallel from non-parallel pairs, collinear from merely
/// parallel ones, and reports invalid input as the empty set.
///
/// Point output:
/// - crossing lines: the intersection point of the two lines
/// - collinear: midpoint of the overlap, or of the gap
/// - parallel: the same gap midpoint, taken in projection order
/// - invalid input: `point` is left untouched
///
/// The products are formed on the power-of-two scaled vectors of
/// [`ScaledSystem`], so the tolerance follows the shape of the pair rather
/// than its absolute size.
pub fn intersect(s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> SegmentRelations {
    let Some(ScaledSystem { a, b, c, .. }) = ScaledSystem::new(s1, s2) else {
        return SegmentRelations::NO_RELATION;
    };

    let tolerance = find_tolerance(&a, &b);

    let d1 = a.y * b.x;
    let d2 = a.x * b.y;
    let denominator = d1 - d2;

    let na1 = b.y * c.x;
    let na2 = b.x * c.y;

    if robust_fuzzy_compare(d1, d2, tolerance) {
        // Both cross terms are checked so that a zero-length segment lying
        // off the other line is not taken as collinear.
        let on_second_line = robust_fuzzy_compare(na1, na2, tolerance);
        let on_first_line = robust_fuzzy_compare(a.y * c.x, a.x * c.y, tolerance);
        let zero_tolerance = coordinate_tolerance(s1, s2);
        if on_second_line && on_first_line {
            return analyze_collinear_segments(s1, s2, point, zero_tolerance);
        }
        if let Some(out) = point {
            *out = representative_point(s1, s2, zero_tolerance);
        }
        return SegmentRelations::PARALLEL;
    }

    let nna = na1 - na2;

    // Unstable as the directions approach parallel and `denominator` -> 0.
    if let Some(out) = point {
        *out = s1.point_at(nna / denominator);
    }

    if outside_unit_interval(nna, denominator) {
        return SegmentRelations::LINES_INTERSECT;
    }

    let nnb = a.x * c.y - a.y * c.x;
    if outside_unit_interval(nnb, denominator) {
        return SegmentRelations::LINES_INTERSECT;
    }

    SegmentRelations::LINES_INTERSECT | SegmentRelations::SEGMENTS_INTERSECT
}

/// Registry entry for [`intersect`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FlagClassifier;

impl SegmentSolver for FlagClassifier {
    fn name(&self) -> &'static str {
        "flag_classifier"
    }

    fn classify(&self, s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> Relation {
        intersect(s1, s2, point).into()
    }
}
