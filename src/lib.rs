//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! - **GA engine** ([`ga`]): boolean chromosomes, roulette wheel selection,
//!   single-point crossover, per-gene bit-flip mutation and elitist
//!   replacement in a fixed-length generational loop.
//! - **Knapsack oracle** ([`knapsack`]): item weights and values with a
//!   capacity constraint, scored as a [`ga::FitnessOracle`], plus fifteen
//!   built-in benchmark instances with known optima.
//! - **Experiment harness** ([`experiment`]): repeated runs over many
//!   datasets, summarized as mean, best and worst fitness.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::ga::{GaConfig, GaRunner};
//! use knapsack_ga::knapsack::Knapsack;
//!
//! let knapsack = Knapsack::dataset(1)?;
//! let config = GaConfig::for_oracle(&knapsack)
//!     .with_generations(100)
//!     .with_seed(7);
//! let best = GaRunner::new(&knapsack, config)?.run();
//! assert_eq!(best.len(), knapsack.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod experiment;
pub mod ga;
pub mod knapsack;

pub use error::{ExperimentError, GaError, KnapsackError};
