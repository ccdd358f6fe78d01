//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.

use super::types::FitnessOracle;
use crate::error::GaError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, chromosome length, the generation budget and
/// the three operator rates.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 20);
/// assert_eq!(config.generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_chromosome_len(12)
///     .with_elitism_rate(0.1)
///     .with_mutation_rate(0.02);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Must be at least 2.
    pub population_size: usize,

    /// Number of genes per chromosome. Must be at least 2 and match the
    /// oracle's [`chromosome_len`](FitnessOracle::chromosome_len).
    pub chromosome_len: usize,

    /// Number of generations to execute. There is no early stopping.
    pub generations: usize,

    /// Probability of applying crossover to a selected pair (0.0–1.0).
    ///
    /// When crossover is not applied, both parents are copied unchanged.
    pub crossover_rate: f64,

    /// Per-gene bit-flip probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Fraction of the population carried over unchanged (0.0–1.0).
    ///
    /// The elite count is `ceil(elitism_rate * population_size)`.
    pub elitism_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy. Ignored when the generator is injected
    /// with [`GaRunner::with_rng`](super::GaRunner::with_rng).
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            chromosome_len: 2,
            generations: 1000,
            crossover_rate: 0.85,
            mutation_rate: 0.03,
            elitism_rate: 0.05,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Default configuration sized for `oracle`.
    pub fn for_oracle<O: FitnessOracle + ?Sized>(oracle: &O) -> Self {
        Self::default().with_chromosome_len(oracle.chromosome_len())
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length.
    pub fn with_chromosome_len(mut self, n: usize) -> Self {
        self.chromosome_len = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate. Out-of-range values are rejected by
    /// [`validate`](Self::validate), not clamped.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the per-gene mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elitism rate.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites kept each generation: `ceil(elitism_rate * population_size)`.
    pub fn elite_count(&self) -> usize {
        let n = (self.elitism_rate * self.population_size as f64).ceil() as usize;
        n.min(self.population_size)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::PopulationTooSmall(self.population_size));
        }
        if self.chromosome_len < 2 {
            return Err(GaError::ChromosomeTooShort(self.chromosome_len));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        check_rate("elitism_rate", self.elitism_rate)?;
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), GaError> {
    // NaN fails the range check too.
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::RateOutOfRange { name, value })
    }
}
