use std::collections::BTreeMap;

use tracing::trace;

use crate::intersect::{Relation, SolverKind};
use crate::math::{nan_point, Point2};

use super::config::DistanceMetric;
use super::corpus::SegmentPair;

/// Worst deviation seen for one solver, and the pair that caused it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccuracyRecord {
    /// Distance to the reference point; infinite when the classifications
    /// disagree.
    pub deviation: f64,
    pub pair: SegmentPair,
}

/// Deviation of one solver's answer from the reference answer.
///
/// Disagreeing classifications are infinitely far apart. Agreeing answers
/// where either side carries no point count as exact. A non-finite distance
/// also counts as infinite.
#[must_use]
pub fn deviation(
    candidate: (Relation, Point2),
    reference: (Relation, Point2),
    metric: DistanceMetric,
) -> f64 {
    let (relation, point) = candidate;
    let (ref_relation, ref_point) = reference;

    if !relation.agrees_with(ref_relation) {
        return f64::INFINITY;
    }
    if !relation.has_point() || !ref_relation.has_point() {
        return 0.0;
    }

    let distance = metric.distance(&point, &ref_point);
    if distance.is_finite() {
        distance
    } else {
        f64::INFINITY
    }
}

/// Runs every solver over `pairs` and keeps, for each non-reference solver,
/// the largest deviation from [`SolverKind::REFERENCE`].
///
/// The first pair seeds each record; later pairs replace it only with a
/// strictly larger deviation. Returns an empty map for empty input.
#[must_use]
pub fn measure(
    pairs: &[SegmentPair],
    metric: DistanceMetric,
) -> BTreeMap<SolverKind, AccuracyRecord> {
    let mut worst: BTreeMap<SolverKind, AccuracyRecord> = BTreeMap::new();

    for pair in pairs {
        let reference = run(SolverKind::REFERENCE, pair);

        for kind in SolverKind::ALL {
            if kind == SolverKind::REFERENCE {
                continue;
            }
            let deviation = deviation(run(kind, pair), reference, metric);
            let record = AccuracyRecord {
                deviation,
                pair: *pair,
            };

            match worst.get_mut(&kind) {
                Some(current) if deviation > current.deviation => {
                    trace!(solver = %kind, deviation, pair = %pair, "new worst case");
                    *current = record;
                }
                Some(_) => {}
                None => {
                    worst.insert(kind, record);
                }
            }
        }
    }
    worst
}

fn run(kind: SolverKind, pair: &SegmentPair) -> (Relation, Point2) {
    let mut point = nan_point();
    let relation = kind.classify(&pair.s1, &pair.s2, Some(&mut point));
    (relation, point)
}
