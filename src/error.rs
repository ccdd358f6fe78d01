//! Error types for the GA engine and the knapsack oracle.

use thiserror::Error;

/// Configuration errors reported when a [`GaRunner`](crate::ga::GaRunner)
/// is constructed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GaError {
    /// Roulette selection draws two distinct parents, so at least two
    /// individuals are required.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// Single-point crossover needs an interior cut point.
    #[error("chromosome_len must be at least 2, got {0}")]
    ChromosomeTooShort(usize),

    /// A probability parameter fell outside `[0, 1]` or was not finite.
    #[error("{name} must lie in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// The configured chromosome length disagrees with the oracle.
    #[error("chromosome length mismatch: config expects {expected}, oracle provides {actual}")]
    ChromosomeLengthMismatch { expected: usize, actual: usize },
}

/// Errors raised while building a knapsack instance.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum KnapsackError {
    /// No built-in dataset exists at this index.
    #[error("unknown dataset {index}: built-in datasets are numbered 1..={max}")]
    UnknownDataset { index: usize, max: usize },

    /// Every item needs exactly one weight and one value.
    #[error("{weights} weights but {values} values")]
    LengthMismatch { weights: usize, values: usize },

    #[error("capacity must be finite and non-negative, got {0}")]
    InvalidCapacity(f64),
}

/// Errors raised by the experiment harness.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExperimentError {
    #[error(transparent)]
    Knapsack(#[from] KnapsackError),

    #[error(transparent)]
    Config(#[from] GaError),

    #[error("runs must be at least 1")]
    NoRuns,
}
