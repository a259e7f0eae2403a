//! Benchmarks and cross-validates the segment intersection solvers.
//!
//! ```text
//! segsect-bench --iterations 1000000 --mode accuracy --categories monte-carlo
//! ```

use clap::Parser;
use segsect::harness::{
    BenchmarkConfig, BenchmarkMode, Benchmarker, Category, DistanceMetric,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Solver calls timed per solver and category.
    #[arg(short, long, default_value_t = 10_000_000)]
    iterations: usize,
    /// Random segment pairs per Monte Carlo category.
    #[arg(short, long, default_value_t = 100_000)]
    cases: usize,
    /// Seed of the Monte Carlo generator.
    #[arg(short, long, default_value_t = 1)]
    seed: u64,
    #[arg(short, long, value_enum, default_value_t = BenchmarkMode::All)]
    mode: BenchmarkMode,
    /// Distance between a solver's point and the reference point.
    #[arg(long, value_enum, default_value_t = DistanceMetric::Euclidean)]
    metric: DistanceMetric,
    /// Categories to run; all of them when omitted.
    #[arg(long, value_enum, value_delimiter = ',')]
    categories: Vec<Category>,
}

impl Cli {
    fn into_config(self) -> BenchmarkConfig {
        let categories = if self.categories.is_empty() {
            Category::ALL.to_vec()
        } else {
            self.categories
        };
        BenchmarkConfig {
            iterations: self.iterations,
            monte_carlo_cases: self.cases,
            seed: self.seed,
            mode: self.mode,
            metric: self.metric,
            categories,
            ..BenchmarkConfig::default()
        }
    }
}

fn main() -> segsect::Result<()> {
    // Default: WARN for everything, INFO for segsect.
    // Override with RUST_LOG (e.g. RUST_LOG=segsect=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("segsect=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let benchmarker = Benchmarker::new(cli.into_config())?;
    print!("{}", benchmarker.run());
    Ok(())
}
