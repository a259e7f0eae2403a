use std::collections::HashSet;

use crate::error::{ConfigError, Result};
use crate::math::Point2;

use super::corpus::Category;
use super::presets::{default_presets, PresetCase};

/// Which benchmark passes to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BenchmarkMode {
    /// Timing only.
    Speed,
    /// Deviation from the reference solver only.
    Accuracy,
    /// Timing followed by accuracy.
    #[default]
    All,
}

impl BenchmarkMode {
    #[must_use]
    pub fn runs_speed(self) -> bool {
        matches!(self, Self::Speed | Self::All)
    }

    #[must_use]
    pub fn runs_accuracy(self) -> bool {
        matches!(self, Self::Accuracy | Self::All)
    }
}

/// Distance used to measure how far a solver's point is from the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    /// Sum of absolute coordinate differences.
    Manhattan,
}

impl DistanceMetric {
    #[must_use]
    pub fn distance(self, p: &Point2, q: &Point2) -> f64 {
        match self {
            Self::Euclidean => nalgebra::distance(p, q),
            Self::Manhattan => (p - q).lp_norm(1),
        }
    }
}

/// Parameters of one benchmark run.
///
/// Built by the caller and handed to [`Benchmarker::new`](super::Benchmarker::new),
/// which validates it.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Solver calls timed per solver and category.
    pub iterations: usize,
    /// Number of random pairs in each Monte Carlo category.
    pub monte_carlo_cases: usize,
    /// Seed of the Monte Carlo generator.
    pub seed: u64,
    pub mode: BenchmarkMode,
    pub metric: DistanceMetric,
    /// Categories to run, in report order.
    pub categories: Vec<Category>,
    /// Curated segment pairs feeding the preset categories.
    pub presets: Vec<PresetCase>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: 10_000_000,
            monte_carlo_cases: 100_000,
            seed: 1,
            mode: BenchmarkMode::default(),
            metric: DistanceMetric::default(),
            categories: Category::ALL.to_vec(),
            presets: default_presets(),
        }
    }
}

impl BenchmarkConfig {
    /// Checks that the configuration describes a runnable benchmark.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] for a zero iteration count,
    /// or a zero case count when a Monte Carlo category is selected.
    /// Returns [`ConfigError::NoCategories`] if no category is selected and
    /// [`ConfigError::DuplicatePreset`] if two presets share a label.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories.into());
        }
        if self.iterations == 0 && self.mode.runs_speed() {
            return Err(ConfigError::InvalidParameter {
                parameter: "iterations",
                value: self.iterations,
            }
            .into());
        }
        if self.monte_carlo_cases == 0 && self.categories.iter().any(|c| c.is_monte_carlo()) {
            return Err(ConfigError::InvalidParameter {
                parameter: "monte_carlo_cases",
                value: self.monte_carlo_cases,
            }
            .into());
        }

        let mut seen = HashSet::new();
        for preset in &self.presets {
            if !seen.insert(preset.label.as_str()) {
                return Err(ConfigError::DuplicatePreset(preset.label.clone()).into());
            }
        }
        Ok(())
    }
}
