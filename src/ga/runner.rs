//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → recombination → mutation → rescoring → elitism → rescoring → repeat.

use super::config::GaConfig;
use super::operators;
use super::selection::{roulette_pair, selection_weights};
use super::types::{FitnessOracle, Individual, Population};
use crate::error::GaError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Result of a GA optimization run.
///
/// Contains the best solution found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GaResult {
    /// The best individual of the final population.
    pub best: Individual,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop against a [`FitnessOracle`].
///
/// The runner owns its configuration, its oracle and its random source.
/// Generations are strictly sequential; independent runs each need their
/// own runner.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaRunner};
/// use knapsack_ga::knapsack::Knapsack;
///
/// let knapsack = Knapsack::dataset(3).unwrap();
/// let config = GaConfig::for_oracle(&knapsack)
///     .with_generations(50)
///     .with_seed(42);
/// let mut runner = GaRunner::new(&knapsack, config).unwrap();
/// let best = runner.run();
/// assert!(best.fitness() <= 35.0);
/// ```
#[derive(Debug)]
pub struct GaRunner<O, R = StdRng> {
    oracle: O,
    config: GaConfig,
    rng: R,
}

impl<O: FitnessOracle> GaRunner<O, StdRng> {
    /// Creates a runner whose generator is seeded from `config.seed`, or
    /// from OS entropy when no seed is set.
    pub fn new(oracle: O, config: GaConfig) -> Result<Self, GaError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(oracle, config, rng)
    }
}

impl<O: FitnessOracle, R: Rng> GaRunner<O, R> {
    /// Creates a runner with an injected random source.
    ///
    /// Fails if the configuration is invalid or its chromosome length
    /// differs from the oracle's.
    pub fn with_rng(oracle: O, config: GaConfig, rng: R) -> Result<Self, GaError> {
        config.validate()?;
        if config.chromosome_len != oracle.chromosome_len() {
            return Err(GaError::ChromosomeLengthMismatch {
                expected: config.chromosome_len,
                actual: oracle.chromosome_len(),
            });
        }
        Ok(Self { oracle, config, rng })
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Creates one random individual, already scored.
    pub fn generate_individual(&mut self) -> Individual {
        operators::random_individual(&self.oracle, self.config.chromosome_len, &mut self.rng)
    }

    /// Creates the initial population, sorted best first.
    pub fn generate_population(&mut self) -> Population {
        operators::random_population(
            &self.oracle,
            self.config.population_size,
            self.config.chromosome_len,
            &mut self.rng,
        )
    }

    /// Breeds an offspring population of `population_size` members from a
    /// population sorted best first.
    ///
    /// Parents are drawn in pairs by roulette selection on shifted fitness
    /// and crossed over with probability `crossover_rate`. When the size is
    /// odd, the second member of the last pair is dropped. Offspring carry
    /// their parents' fitness until rescored.
    pub fn recombination(&mut self, population: &Population) -> Population {
        let n = self.config.population_size;
        let weights = selection_weights(population);

        let mut offspring = Vec::with_capacity(n);
        while offspring.len() < n {
            let (i, j) = roulette_pair(&weights, &mut self.rng);
            let (first, second) = if self.rng.random::<f64>() < self.config.crossover_rate {
                operators::single_point_crossover(&population[i], &population[j], &mut self.rng)
            } else {
                (population[i].clone(), population[j].clone())
            };

            offspring.push(first);
            if offspring.len() < n {
                offspring.push(second);
            }
        }
        Population::new(offspring)
    }

    /// Applies bit-flip mutation to every member. Fitness is left stale.
    pub fn mutation(&mut self, population: &mut Population) {
        let rate = self.config.mutation_rate;
        for individual in population.individuals_mut() {
            operators::bit_flip_mutation(individual, rate, &mut self.rng);
        }
    }

    /// Re-evaluates every member against the oracle and sorts best first.
    pub fn update_fitness(&self, population: &mut Population) {
        population.rescore(&self.oracle);
    }

    /// Keeps the top `elite_count()` members of `population` and fills the
    /// rest from the head of `offspring`.
    pub fn elitism(&self, population: &mut Population, offspring: &Population) {
        operators::elitism(population, offspring, self.config.elite_count());
    }

    /// Runs the GA for the configured number of generations and returns the
    /// best individual of the final population.
    pub fn run(&mut self) -> Individual {
        self.run_with_stats().best
    }

    /// Runs the GA, additionally reporting the per-generation best fitness.
    pub fn run_with_stats(&mut self) -> GaResult {
        info!(
            population_size = self.config.population_size,
            chromosome_len = self.config.chromosome_len,
            generations = self.config.generations,
            "starting GA run"
        );

        // 1. Initial population, scored and sorted
        let mut population = self.generate_population();

        let mut fitness_history = Vec::with_capacity(self.config.generations + 1);
        fitness_history.push(population[0].fitness());

        // 2. Generational loop
        for generation in 1..=self.config.generations {
            let mut offspring = self.recombination(&population);
            self.mutation(&mut offspring);
            self.update_fitness(&mut offspring);

            self.elitism(&mut population, &offspring);
            self.update_fitness(&mut population);

            let best = population[0].fitness();
            fitness_history.push(best);
            debug!(
                generation,
                best,
                worst = population.worst_fitness().unwrap_or(best),
                "generation complete"
            );
        }

        let best = population[0].clone();
        info!(best_fitness = best.fitness(), "GA run finished");

        GaResult {
            best_fitness: best.fitness(),
            best,
            generations: self.config.generations,
            fitness_history,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- OneMax problem: maximize the number of set bits ----

    #[derive(Debug)]
    struct OneMax {
        n: usize,
    }

    impl FitnessOracle for OneMax {
        fn chromosome_len(&self) -> usize {
            self.n
        }

        fn objective(&self, genes: &[bool]) -> f64 {
            genes.iter().filter(|&&g| g).count() as f64
        }
    }

    /// Always zero: exercises the uniform selection fallback.
    #[derive(Debug)]
    struct Flat {
        n: usize,
    }

    impl FitnessOracle for Flat {
        fn chromosome_len(&self) -> usize {
            self.n
        }

        fn objective(&self, _genes: &[bool]) -> f64 {
            0.0
        }
    }

    fn config(n: usize) -> GaConfig {
        GaConfig::default().with_chromosome_len(n).with_seed(42)
    }

    #[test]
    fn test_onemax_convergence() {
        let problem = OneMax { n: 10 };
        let config = config(10)
            .with_population_size(20)
            .with_generations(200)
            .with_mutation_rate(0.05)
            .with_elitism_rate(0.1);

        let result = GaRunner::new(&problem, config).unwrap().run_with_stats();

        assert!(
            result.best_fitness >= 8.0,
            "expected fitness >= 8 for 10-bit OneMax, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_rejects_invalid_config() {
        let err = GaRunner::new(OneMax { n: 5 }, config(5).with_population_size(1)).unwrap_err();
        assert_eq!(err, GaError::PopulationTooSmall(1));

        let err = GaRunner::new(OneMax { n: 1 }, config(1)).unwrap_err();
        assert_eq!(err, GaError::ChromosomeTooShort(1));

        let err = GaRunner::new(OneMax { n: 5 }, config(5).with_crossover_rate(1.1)).unwrap_err();
        assert!(matches!(err, GaError::RateOutOfRange { name: "crossover_rate", .. }));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = GaRunner::new(OneMax { n: 6 }, config(5)).unwrap_err();
        assert_eq!(
            err,
            GaError::ChromosomeLengthMismatch {
                expected: 5,
                actual: 6
            }
        );
    }

    #[test]
    fn test_generate_individual_scored() {
        let mut runner = GaRunner::new(OneMax { n: 9 }, config(9)).unwrap();
        let individual = runner.generate_individual();
        assert_eq!(individual.len(), 9);
        assert_eq!(individual.fitness(), runner.oracle().objective(individual.genes()));
    }

    #[test]
    fn test_recombination_odd_population() {
        let mut runner = GaRunner::new(OneMax { n: 6 }, config(6).with_population_size(5)).unwrap();
        let population = runner.generate_population();
        let offspring = runner.recombination(&population);
        assert_eq!(offspring.len(), 5);
        assert!(offspring.iter().all(|i| i.len() == 6));
    }

    #[test]
    fn test_recombination_does_not_touch_parents() {
        let mut runner = GaRunner::new(OneMax { n: 8 }, config(8).with_crossover_rate(1.0)).unwrap();
        let population = runner.generate_population();
        let before = population.clone();
        let _ = runner.recombination(&population);
        assert_eq!(population, before);
    }

    #[test]
    fn test_recombination_without_crossover_copies_parents() {
        let mut runner = GaRunner::new(OneMax { n: 8 }, config(8).with_crossover_rate(0.0)).unwrap();
        let population = runner.generate_population();
        let offspring = runner.recombination(&population);
        for child in &offspring {
            assert!(population.iter().any(|p| p == child));
        }
    }

    #[test]
    fn test_mutation_full_rate_inverts() {
        let mut runner = GaRunner::new(OneMax { n: 4 }, config(4).with_mutation_rate(1.0)).unwrap();
        let mut population = runner.generate_population();
        let before = population.clone();
        runner.mutation(&mut population);
        for (after, before) in population.iter().zip(before.iter()) {
            let inverted: Vec<bool> = before.genes().iter().map(|g| !g).collect();
            assert_eq!(after.genes(), inverted.as_slice());
            assert_eq!(after.fitness(), before.fitness());
        }
    }

    #[test]
    fn test_elite_preservation() {
        let problem = OneMax { n: 12 };
        let config = config(12)
            .with_population_size(20)
            .with_generations(60)
            .with_elitism_rate(0.2);

        let result = GaRunner::new(&problem, config).unwrap().run_with_stats();

        // Best fitness never gets worse with at least one elite
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "fitness should be monotonically non-decreasing with elitism: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_fitness_history() {
        let problem = OneMax { n: 10 };
        let config = config(10).with_generations(30);

        let result = GaRunner::new(&problem, config).unwrap().run_with_stats();

        // History should have generations + 1 entries (initial + each gen)
        assert_eq!(result.fitness_history.len(), 31);
        assert_eq!(result.generations, 30);
        assert_eq!(result.best_fitness, result.best.fitness());
    }

    #[test]
    fn test_zero_generations_returns_initial_best() {
        let problem = OneMax { n: 10 };
        let mut a = GaRunner::new(&problem, config(10).with_generations(0)).unwrap();
        let mut b = GaRunner::new(&problem, config(10).with_generations(0)).unwrap();

        let initial = a.generate_population();
        let best = b.run();
        assert_eq!(&best, &initial[0]);
    }

    #[test]
    fn test_flat_fitness_does_not_fault() {
        let config = config(6).with_population_size(7).with_generations(20);
        let result = GaRunner::new(Flat { n: 6 }, config).unwrap().run_with_stats();
        assert_eq!(result.best_fitness, 0.0);
        assert!(result.fitness_history.iter().all(|&f| f == 0.0));
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = OneMax { n: 16 };
        let config = config(16).with_generations(40);

        let a = GaRunner::new(&problem, config.clone()).unwrap().run_with_stats();
        let b = GaRunner::new(&problem, config).unwrap().run_with_stats();
        assert_eq!(a, b);
    }

    #[test]
    fn test_injected_rng() {
        let problem = OneMax { n: 8 };
        let rng = StdRng::seed_from_u64(7);
        let mut runner = GaRunner::with_rng(&problem, config(8).with_generations(5), rng).unwrap();
        assert_eq!(runner.run().len(), 8);
    }
}
