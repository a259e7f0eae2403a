//! Cross-validation and timing of the intersection solvers.

mod accuracy;
mod config;
mod corpus;
mod presets;
mod report;
mod speed;

pub use accuracy::{deviation, measure, AccuracyRecord};
pub use config::{BenchmarkConfig, BenchmarkMode, DistanceMetric};
pub use corpus::{monte_carlo_pairs, preset_pairs, Category, SegmentPair};
pub use presets::{default_presets, PresetCase, PresetKind};
pub use report::{AccuracyReport, BenchmarkReport, SpeedReport};
pub use speed::{time_solvers, SpeedSample};

use tracing::{debug, info, warn};

use crate::error::Result;

/// Runs the benchmark passes described by a validated [`BenchmarkConfig`].
#[derive(Debug, Clone)]
pub struct Benchmarker {
    config: BenchmarkConfig,
}

impl Benchmarker {
    /// Creates a benchmarker after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns the error of [`BenchmarkConfig::validate`].
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// The segment pairs of `category` under this configuration.
    #[must_use]
    pub fn test_set(&self, category: Category) -> Vec<SegmentPair> {
        let pairs = corpus::build(
            category,
            &self.config.presets,
            self.config.monte_carlo_cases,
            self.config.seed,
        );
        debug!(%category, cases = pairs.len(), "built test set");
        pairs
    }

    /// Times every solver over each selected category.
    ///
    /// Empty categories are reported with no samples.
    #[must_use]
    pub fn run_speed(&self) -> Vec<SpeedReport> {
        self.config
            .categories
            .iter()
            .map(|&category| {
                let pairs = self.test_set(category);
                if pairs.is_empty() {
                    warn!(%category, "empty test set, skipping speed benchmark");
                }
                let samples = time_solvers(&pairs, self.config.iterations);
                info!(%category, iterations = self.config.iterations, "speed benchmark finished");
                SpeedReport {
                    category,
                    case_count: pairs.len(),
                    samples,
                }
            })
            .collect()
    }

    /// Measures every solver's worst deviation from the reference over each
    /// selected category.
    #[must_use]
    pub fn run_accuracy(&self) -> Vec<AccuracyReport> {
        self.config
            .categories
            .iter()
            .map(|&category| {
                let pairs = self.test_set(category);
                let records = measure(&pairs, self.config.metric);
                info!(%category, cases = pairs.len(), "accuracy benchmark finished");
                AccuracyReport {
                    category,
                    case_count: pairs.len(),
                    records,
                }
            })
            .collect()
    }

    /// Runs the passes selected by the configured [`BenchmarkMode`].
    #[must_use]
    pub fn run(&self) -> BenchmarkReport {
        let mut report = BenchmarkReport::default();
        if self.config.mode.runs_speed() {
            report.speed = self.run_speed();
        }
        if self.config.mode.runs_accuracy() {
            report.accuracy = self.run_accuracy();
        }
        report
    }
}
