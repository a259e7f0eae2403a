use std::collections::BTreeMap;
use std::fmt;

use crate::intersect::SolverKind;

use super::accuracy::AccuracyRecord;
use super::corpus::Category;
use super::speed::SpeedSample;

/// Timings of every solver over one category.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedReport {
    pub category: Category,
    pub case_count: usize,
    pub samples: Vec<SpeedSample>,
}

/// Worst deviation of every non-reference solver over one category.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyReport {
    pub category: Category,
    pub case_count: usize,
    pub records: BTreeMap<SolverKind, AccuracyRecord>,
}

/// Everything one benchmark run produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkReport {
    pub speed: Vec<SpeedReport>,
    pub accuracy: Vec<AccuracyReport>,
}

fn banner(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    let rule = "=".repeat(title.len());
    writeln!(f, "{rule}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{rule}")
}

impl fmt::Display for SpeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} test cases", self.category, self.case_count)?;
        for sample in &self.samples {
            writeln!(
                f,
                "\t{:<18}\t{:.3} ns per call",
                format!("{}:", sample.solver),
                sample.nanos_per_call
            )?;
        }
        writeln!(f)
    }
}

impl fmt::Display for AccuracyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {} test cases", self.category, self.case_count)?;
        for (solver, record) in &self.records {
            writeln!(
                f,
                "\t{:<18}\tmax deviation {:e}",
                format!("{solver}:"),
                record.deviation
            )?;
            writeln!(f, "\t\t{}", record.pair)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.speed.is_empty() {
            banner(f, "Speed Benchmarks")?;
            for report in &self.speed {
                write!(f, "{report}")?;
            }
        }
        if !self.accuracy.is_empty() {
            banner(f, "Accuracy Benchmarks")?;
            for report in &self.accuracy {
                write!(f, "{report}")?;
            }
        }
        Ok(())
    }
}
