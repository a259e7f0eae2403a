use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geometry::Segment;

use super::presets::{PresetCase, PresetKind};

/// Source of the segment pairs a benchmark pass runs over.
///
/// Every source comes in a plain and a swapped variant; the swapped one
/// passes the same pairs with the operands exchanged, which exposes
/// solvers whose results depend on argument order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum Category {
    PresetParallel,
    PresetParallelSwapped,
    PresetNonParallel,
    PresetNonParallelSwapped,
    MonteCarlo,
    MonteCarloSwapped,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::PresetParallel,
        Self::PresetParallelSwapped,
        Self::PresetNonParallel,
        Self::PresetNonParallelSwapped,
        Self::MonteCarlo,
        Self::MonteCarloSwapped,
    ];

    #[must_use]
    pub fn is_swapped(self) -> bool {
        matches!(
            self,
            Self::PresetParallelSwapped | Self::PresetNonParallelSwapped | Self::MonteCarloSwapped
        )
    }

    #[must_use]
    pub fn is_monte_carlo(self) -> bool {
        matches!(self, Self::MonteCarlo | Self::MonteCarloSwapped)
    }

    /// The preset subset this category draws from, if any.
    #[must_use]
    pub fn preset_kind(self) -> Option<PresetKind> {
        match self {
            Self::PresetParallel | Self::PresetParallelSwapped => Some(PresetKind::Parallel),
            Self::PresetNonParallel | Self::PresetNonParallelSwapped => {
                Some(PresetKind::NonParallel)
            }
            Self::MonteCarlo | Self::MonteCarloSwapped => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PresetParallel => "PresetParallel",
            Self::PresetParallelSwapped => "PresetParallelSwapped",
            Self::PresetNonParallel => "PresetNonParallel",
            Self::PresetNonParallelSwapped => "PresetNonParallelSwapped",
            Self::MonteCarlo => "MonteCarlo",
            Self::MonteCarloSwapped => "MonteCarloSwapped",
        };
        f.write_str(name)
    }
}

/// Two segments passed to a solver as `(s1, s2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPair {
    pub s1: Segment,
    pub s2: Segment,
}

impl SegmentPair {
    #[must_use]
    pub fn new(s1: Segment, s2: Segment) -> Self {
        Self { s1, s2 }
    }

    /// The same pair with the operands exchanged.
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            s1: self.s2,
            s2: self.s1,
        }
    }
}

impl fmt::Display for SegmentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {}", self.s1, self.s2)
    }
}

/// Pairs from the presets of the given kind, in table order.
#[must_use]
pub fn preset_pairs(presets: &[PresetCase], kind: PresetKind, swap: bool) -> Vec<SegmentPair> {
    presets
        .iter()
        .filter(|preset| preset.kind == kind)
        .map(|preset| {
            let (s1, s2) = preset.segments();
            let pair = SegmentPair::new(s1, s2);
            if swap {
                pair.swapped()
            } else {
                pair
            }
        })
        .collect()
}

/// `count` random pairs, reproducible from `seed`.
///
/// Each coordinate is the ratio of two uniform integers in `[0, 2^31)`,
/// which spreads magnitudes over many orders and occasionally divides by
/// zero, producing infinite or NaN coordinates that probe the invalid-input
/// path.
#[must_use]
pub fn monte_carlo_pairs(count: usize, seed: u64, swap: bool) -> Vec<SegmentPair> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut random_segment = || {
        let mut coord = || {
            let numerator = rng.random_range(0..=i32::MAX);
            let denominator = rng.random_range(0..=i32::MAX);
            f64::from(numerator) / f64::from(denominator)
        };
        Segment::from_coords(coord(), coord(), coord(), coord())
    };

    (0..count)
        .map(|_| {
            let s1 = random_segment();
            let s2 = random_segment();
            let pair = SegmentPair::new(s1, s2);
            if swap {
                pair.swapped()
            } else {
                pair
            }
        })
        .collect()
}

/// Builds the pairs of `category`.
#[must_use]
pub fn build(
    category: Category,
    presets: &[PresetCase],
    monte_carlo_cases: usize,
    seed: u64,
) -> Vec<SegmentPair> {
    match category.preset_kind() {
        Some(kind) => preset_pairs(presets, kind, category.is_swapped()),
        None => monte_carlo_pairs(monte_carlo_cases, seed, category.is_swapped()),
    }
}
