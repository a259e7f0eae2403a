use crate::geometry::Segment;
use crate::math::{robust_fuzzy_compare, Point2, EPSILON};

use super::SegmentRelations;

/// Which segment an endpoint came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
    First,
    Second,
}

#[derive(Debug, Clone, Copy)]
struct TaggedPoint {
    point: Point2,
    parent: Parent,
}

/// Coordinate axis the endpoints are projected onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn key(self, p: &Point2) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }
}

/// Zero tolerance for comparing raw coordinates of two segments.
///
/// Machine epsilon scaled by the largest coordinate magnitude, capped at
/// `EPSILON`, so that coordinates far below `EPSILON` are not all mistaken
/// for zero.
#[must_use]
pub fn coordinate_tolerance(s1: &Segment, s2: &Segment) -> f64 {
    let scale = s1
        .coords()
        .iter()
        .chain(s2.coords().iter())
        .fold(0.0_f64, |acc, c| acc.max(c.abs()));
    EPSILON * scale.min(1.0)
}

/// Picks the projection axis.
///
/// The first segment decides unless it has zero length, in which case the
/// second one does. If both are points, the vector between them decides.
fn projection_axis(s1: &Segment, s2: &Segment, zero_tolerance: f64) -> Axis {
    let (from, to) = if !s1.is_degenerate() {
        (s1.p1, s1.p2)
    } else if !s2.is_degenerate() {
        (s2.p1, s2.p2)
    } else {
        (s1.p1, s2.p1)
    };
    if robust_fuzzy_compare(from.x, to.x, zero_tolerance) {
        Axis::Y
    } else {
        Axis::X
    }
}

fn sorted_endpoints(s1: &Segment, s2: &Segment, axis: Axis) -> [TaggedPoint; 4] {
    let mut endpoints = [
        TaggedPoint { point: s1.p1, parent: Parent::First },
        TaggedPoint { point: s1.p2, parent: Parent::First },
        TaggedPoint { point: s2.p1, parent: Parent::Second },
        TaggedPoint { point: s2.p2, parent: Parent::Second },
    ];
    // Stable: ties keep first-segment endpoints ahead.
    endpoints.sort_by(|a, b| axis.key(&a.point).total_cmp(&axis.key(&b.point)));
    endpoints
}

/// The span between the 2nd and 3rd endpoints in projection order.
fn inner_span(endpoints: &[TaggedPoint; 4]) -> Segment {
    Segment::new(endpoints[1].point, endpoints[2].point)
}

/// Midpoint between the 2nd and 3rd endpoints in projection order.
///
/// This is the midpoint of the overlap when the segments overlap, and the
/// midpoint of the gap between them otherwise. For parallel segments that
/// are not collinear it still lies halfway between the two lines.
#[must_use]
pub fn representative_point(s1: &Segment, s2: &Segment, zero_tolerance: f64) -> Point2 {
    let axis = projection_axis(s1, s2, zero_tolerance);
    inner_span(&sorted_endpoints(s1, s2, axis)).midpoint()
}

/// Relation between two segments already known to be collinear.
///
/// The caller guarantees that both segments are finite and lie on one line.
/// Always reports `PARALLEL | LINES_INTERSECT`, plus `SEGMENTS_INTERSECT`
/// when they share at least one point. If `point` is supplied it receives
/// [`representative_point`].
///
/// The four endpoints are sorted along the non-degenerate axis. If the two
/// lowest come from different segments, the ranges interleave. Otherwise
/// the segments share a point only when the middle two coincide.
pub fn analyze_collinear_segments(
    s1: &Segment,
    s2: &Segment,
    point: Option<&mut Point2>,
    zero_tolerance: f64,
) -> SegmentRelations {
    let relations = SegmentRelations::PARALLEL | SegmentRelations::LINES_INTERSECT;

    let axis = projection_axis(s1, s2, zero_tolerance);
    let endpoints = sorted_endpoints(s1, s2, axis);

    if let Some(out) = point {
        *out = inner_span(&endpoints).midpoint();
    }

    if endpoints[0].parent != endpoints[1].parent {
        return relations | SegmentRelations::SEGMENTS_INTERSECT;
    }

    // Touching at exactly one shared endpoint.
    let inner1 = axis.key(&endpoints[1].point);
    let inner2 = axis.key(&endpoints[2].point);
    if robust_fuzzy_compare(inner1, inner2, zero_tolerance) {
        return relations | SegmentRelations::SEGMENTS_INTERSECT;
    }

    relations
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn analyze(s1: &Segment, s2: &Segment) -> (SegmentRelations, Point2) {
        let mut p = crate::math::nan_point();
        let relations =
            analyze_collinear_segments(s1, s2, Some(&mut p), coordinate_tolerance(s1, s2));
        (relations, p)
    }

    const PARALLEL: SegmentRelations = SegmentRelations::PARALLEL;

    #[test]
    fn disjoint_reports_gap_midpoint() {
        let s1 = Segment::from_coords(0.0, 0.0, 4.0, 3.0);
        let s2 = Segment::from_coords(8.0, 6.0, 10.0, 7.5);
        let (relations, p) = analyze(&s1, &s2);
        assert_eq!(relations, PARALLEL | SegmentRelations::LINES_INTERSECT);
        assert_abs_diff_eq!(p.x, 6.0);
        assert_abs_diff_eq!(p.y, 4.5);
    }

    #[test]
    fn touching_endpoint_shares_a_point() {
        let s1 = Segment::from_coords(0.0, 0.0, 4.0, 3.0);
        let s2 = Segment::from_coords(4.0, 3.0, 10.0, 7.5);
        let (relations, p) = analyze(&s1, &s2);
        assert!(relations.segments_intersect());
        assert_eq!(p, Point2::new(4.0, 3.0));

        let (swapped, q) = analyze(&s2, &s1);
        assert_eq!(swapped, relations);
        assert_eq!(q, p);
    }

    #[test]
    fn nested_reports_inner_midpoint() {
        let s1 = Segment::from_coords(2.0, 1.0, 1.0, 1.0);
        let s2 = Segment::from_coords(-1.0, 1.0, 4.0, 1.0);
        let (relations, p) = analyze(&s1, &s2);
        assert!(relations.segments_intersect());
        assert!(relations.is_collinear());
        assert_abs_diff_eq!(p.x, 1.5);
        assert_abs_diff_eq!(p.y, 1.0);
    }

    #[test]
    fn partial_overlap_midpoint() {
        let s1 = Segment::from_coords(0.0, 0.0, 4.0, 0.0);
        let s2 = Segment::from_coords(6.0, 0.0, 2.0, 0.0);
        let (relations, p) = analyze(&s1, &s2);
        assert!(relations.segments_intersect());
        assert_eq!(p, Point2::new(3.0, 0.0));
    }

    #[test]
    fn vertical_segments_sort_on_y() {
        let s1 = Segment::from_coords(5.0, 0.0, 5.0, 1.0);
        let s2 = Segment::from_coords(5.0, 3.0, 5.0, 2.0);
        let (relations, p) = analyze(&s1, &s2);
        assert!(!relations.segments_intersect());
        assert_eq!(p, Point2::new(5.0, 1.5));
    }

    #[test]
    fn sub_epsilon_horizontal_is_not_vertical() {
        let s1 = Segment::from_coords(0.0, 1e-18, 1e-18, 1e-18);
        let s2 = Segment::from_coords(3e-18, 1e-18, 2e-18, 1e-18);
        let (relations, p) = analyze(&s1, &s2);
        assert!(!relations.segments_intersect());
        assert_abs_diff_eq!(p.x, 1.5e-18, epsilon = 1e-30);
    }

    #[test]
    fn zero_length_first_segment_uses_second_axis() {
        let point = Segment::from_coords(2.0, 0.0, 2.0, 0.0);
        let line = Segment::from_coords(0.0, 0.0, 5.0, 0.0);
        let (relations, p) = analyze(&point, &line);
        assert!(relations.segments_intersect());
        assert_eq!(p, Point2::new(2.0, 0.0));
    }

    #[test]
    fn two_distinct_points() {
        let a = Segment::from_coords(0.0, 0.0, 0.0, 0.0);
        let b = Segment::from_coords(2.0, 2.0, 2.0, 2.0);
        let (relations, p) = analyze(&a, &b);
        assert_eq!(relations, PARALLEL | SegmentRelations::LINES_INTERSECT);
        assert_eq!(p, Point2::new(1.0, 1.0));
    }

    #[test]
    fn point_is_optional() {
        let s1 = Segment::from_coords(0.0, 0.0, 1.0, 0.0);
        let s2 = Segment::from_coords(0.5, 0.0, 2.0, 0.0);
        let relations = analyze_collinear_segments(&s1, &s2, None, EPSILON);
        assert!(relations.segments_intersect());
    }

    #[test]
    fn coordinate_tolerance_tracks_scale() {
        let tiny = Segment::from_coords(1e-18, 0.0, 0.0, 1e-18);
        assert_abs_diff_eq!(coordinate_tolerance(&tiny, &tiny), EPSILON * 1e-18);
        let big = Segment::from_coords(1e6, 0.0, 0.0, 1.0);
        assert_abs_diff_eq!(coordinate_tolerance(&big, &tiny), EPSILON);
    }
}
