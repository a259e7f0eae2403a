use std::hint::black_box;
use std::time::Instant;

use crate::intersect::SolverKind;
use crate::math::nan_point;

use super::corpus::SegmentPair;

/// Mean cost of one solver call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedSample {
    pub solver: SolverKind,
    pub nanos_per_call: f64,
}

/// Times `iterations` calls of every solver, cycling through `pairs`.
///
/// Each call gets a fresh output slot, and both the inputs and the results
/// go through [`black_box`] so the loop cannot be optimized away. Returns an
/// empty list if `pairs` or `iterations` is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn time_solvers(pairs: &[SegmentPair], iterations: usize) -> Vec<SpeedSample> {
    if pairs.is_empty() || iterations == 0 {
        return Vec::new();
    }

    SolverKind::ALL
        .iter()
        .map(|&kind| {
            let solver = kind.solver();
            let start = Instant::now();
            for pair in pairs.iter().cycle().take(iterations) {
                let mut point = nan_point();
                let relation =
                    solver.classify(black_box(&pair.s1), black_box(&pair.s2), Some(&mut point));
                black_box((relation, point));
            }
            let elapsed = start.elapsed().as_nanos() as f64;
            SpeedSample {
                solver: kind,
                nanos_per_call: elapsed / iterations as f64,
            }
        })
        .collect()
}
