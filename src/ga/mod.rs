//! Genetic Algorithm engine for boolean chromosomes.
//!
//! A single-objective, generational GA. The problem is supplied as a
//! [`FitnessOracle`] mapping a bit vector to a fitness (higher is better).
//!
//! # Key Types
//!
//! - [`Individual`]: A bit chromosome and its cached fitness
//! - [`Population`]: Ordered individuals, sortable best first
//! - [`GaConfig`]: Algorithm parameters (population size, rates, generations)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # Submodules
//!
//! - [`operators`]: Initialization, single-point crossover, bit-flip mutation, elitism
//! - [`selection`]: Roulette wheel selection of parent pairs
//!
//! # Generation Loop
//!
//! 1. Breed offspring by roulette selection and crossover
//! 2. Mutate offspring, rescore and sort them
//! 3. Keep the elites of the previous population, fill the rest with offspring
//! 4. Rescore and sort the merged population
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use types::{FitnessOracle, Individual, Population};
