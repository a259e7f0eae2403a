use thiserror::Error;

/// Top-level error type for segsect.
///
/// The intersection engine itself never fails; errors only come from
/// building or validating a benchmark run.
#[derive(Debug, Error)]
pub enum SegsectError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to benchmark configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{parameter} = {value} must be positive")]
    InvalidParameter {
        parameter: &'static str,
        value: usize,
    },

    #[error("duplicate preset label: {0}")]
    DuplicatePreset(String),

    #[error("no test categories selected")]
    NoCategories,
}

/// Convenience type alias for results using [`SegsectError`].
pub type Result<T> = std::result::Result<T, SegsectError>;
