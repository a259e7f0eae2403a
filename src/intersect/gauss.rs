use crate::geometry::Segment;
use crate::math::{cross, Point2, Vector2, EPSILON};

use super::collinear::{analyze_collinear_segments, coordinate_tolerance, representative_point};
use super::{Relation, ScaledSystem, SegmentRelations, SegmentSolver};

/// Augmented matrix of the system `dir * s - ldir * t = lorigin - origin`,
/// in scaled coordinates.
type System = [[f64; 3]; 2];

/// Gaussian elimination with complete pivoting.
///
/// Builds the 2x2 system for the two line parameters, moves the largest
/// coefficient to `(0, 0)`, eliminates, and back-substitutes. A reduced
/// second pivot below `EPSILON` times the first marks the system as rank
/// deficient: the lines are parallel, and a separate test decides whether
/// they are collinear.
///
/// This is the reference solver of the accuracy harness. Output points
/// follow the same policy as the flag classifier.
///
/// The coefficients are the power-of-two scaled vectors of
/// [`ScaledSystem`]; output points are evaluated on the unscaled segments.
#[allow(clippy::float_cmp, clippy::similar_names)]
pub fn intersect(s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> SegmentRelations {
    let Some(system) = ScaledSystem::new(s1, s2) else {
        return SegmentRelations::NO_RELATION;
    };

    let mut origin = s1.p1;
    let mut lorigin = s2.p1;
    let mut dir = s1.direction();
    let mut ldir = s2.direction();
    // `dir` as it appears in the scaled matrix.
    let mut scaled_dir = system.a;

    let mut matrix: System = [
        [system.a.x, system.b.x, -system.c.x],
        [system.a.y, system.b.y, -system.c.y],
    ];

    let (pivot_row, pivot_col) = largest_coefficient(&matrix);
    if pivot_col == 1 {
        for row in &mut matrix {
            row.swap(0, 1);
        }
        std::mem::swap(&mut origin, &mut lorigin);
        std::mem::swap(&mut dir, &mut ldir);
        scaled_dir = -system.b;
    }
    if pivot_row == 1 {
        matrix.swap(0, 1);
    }

    // Every coefficient is zero: both segments are single points.
    if matrix[0][0] == 0.0 {
        return analyze_collinear_segments(s1, s2, point, coordinate_tolerance(s1, s2));
    }

    let pivot = 1.0 / matrix[0][0];
    matrix[1][0] *= -pivot;
    matrix[1][2] = matrix[1][0].mul_add(matrix[0][2], matrix[1][2]);
    matrix[1][1] = matrix[1][0].mul_add(matrix[0][1], matrix[1][1]);

    if matrix[1][1].abs() < matrix[0][0].abs() * EPSILON {
        let w = system.rescale_vector(&(lorigin - origin));
        let coordinate_scale = system.rescale(
            origin
                .x
                .abs()
                .max(origin.y.abs())
                .max(lorigin.x.abs())
                .max(lorigin.y.abs()),
        );
        if !is_collinear_offset(&scaled_dir, &w, coordinate_scale) {
            if let Some(out) = point {
                *out = representative_point(s1, s2, coordinate_tolerance(s1, s2));
            }
            return SegmentRelations::PARALLEL;
        }

        // Parameters of the other segment's endpoints along `dir`.
        let mut n = pivot * matrix[0][2];
        let mut n2 = pivot * (matrix[0][2] - matrix[0][1]);
        if n > n2 {
            std::mem::swap(&mut n, &mut n2);
        }

        let mut relation = SegmentRelations::PARALLEL | SegmentRelations::LINES_INTERSECT;
        let mid = if n < 0.0 {
            if n2 > 1.0 {
                relation |= SegmentRelations::SEGMENTS_INTERSECT;
                0.5
            } else {
                if n2 >= 0.0 {
                    relation |= SegmentRelations::SEGMENTS_INTERSECT;
                }
                0.5 * n2
            }
        } else if n <= 1.0 {
            relation |= SegmentRelations::SEGMENTS_INTERSECT;
            0.5 * (n + n2.min(1.0))
        } else {
            0.5 * (1.0 + n)
        };

        if let Some(out) = point {
            *out = Point2::new(mid.mul_add(dir.x, origin.x), mid.mul_add(dir.y, origin.y));
        }
        return relation;
    }

    let nb = matrix[1][2] / matrix[1][1];
    if let Some(out) = point {
        *out = Point2::new(nb.mul_add(ldir.x, lorigin.x), nb.mul_add(ldir.y, lorigin.y));
    }

    if !(0.0..=1.0).contains(&nb) {
        return SegmentRelations::LINES_INTERSECT;
    }

    let na = pivot * (-nb).mul_add(matrix[0][1], matrix[0][2]);
    if (0.0..=1.0).contains(&na) {
        SegmentRelations::LINES_INTERSECT | SegmentRelations::SEGMENTS_INTERSECT
    } else {
        SegmentRelations::LINES_INTERSECT
    }
}

/// Row and column of the coefficient with the largest magnitude.
///
/// Ties resolve to the earliest position in row-major order.
fn largest_coefficient(matrix: &System) -> (usize, usize) {
    let mut best = (0, 0);
    for (r, row) in matrix.iter().enumerate() {
        for (c, value) in row.iter().take(2).enumerate() {
            if value.abs() > matrix[best.0][best.1].abs() {
                best = (r, c);
            }
        }
    }
    best
}

/// Whether the offset `w` between the two line origins runs along `dir`.
///
/// Compares the two products of `cross(dir, w)` against a tolerance scaled
/// by their own size plus the rounding already present in `w`, which is
/// proportional to `coordinate_scale`, the largest origin coordinate
/// magnitude. All three inputs share one scale factor.
fn is_collinear_offset(dir: &Vector2, w: &Vector2, coordinate_scale: f64) -> bool {
    let tolerance = 2.0
        * EPSILON
        * ((dir.x * w.y).abs() + (dir.y * w.x).abs() + dir.amax() * coordinate_scale);
    cross(dir, w).abs() <= tolerance
}

/// Registry entry for [`intersect`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussElimination;

impl SegmentSolver for GaussElimination {
    fn name(&self) -> &'static str {
        "gauss_elimination"
    }

    fn classify(&self, s1: &Segment, s2: &Segment, point: Option<&mut Point2>) -> Relation {
        intersect(s1, s2, point).into()
    }
}
