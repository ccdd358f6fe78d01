//! Core data types for the GA engine.
//!
//! [`Individual`] and [`Population`] carry the evolving state;
//! [`FitnessOracle`] is the contract between the engine and the problem
//! being optimized.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maps a boolean chromosome to a scalar fitness.
///
/// Higher fitness is better (maximization). Values may be negative, for
/// example to penalize constraint violations.
///
/// # Thread Safety
///
/// `FitnessOracle` must be `Send + Sync` so that independent runs over the
/// same instance can share one oracle.
pub trait FitnessOracle: Send + Sync {
    /// Number of genes in a chromosome for this problem.
    fn chromosome_len(&self) -> usize;

    /// Evaluates a chromosome of length [`chromosome_len`](Self::chromosome_len).
    fn objective(&self, genes: &[bool]) -> f64;

    /// Known optimum, if any. Used for reporting only; the engine never
    /// reads it.
    fn optimum(&self) -> Option<f64> {
        None
    }
}

impl<O: FitnessOracle + ?Sized> FitnessOracle for &O {
    fn chromosome_len(&self) -> usize {
        (**self).chromosome_len()
    }

    fn objective(&self, genes: &[bool]) -> f64 {
        (**self).objective(genes)
    }

    fn optimum(&self) -> Option<f64> {
        (**self).optimum()
    }
}

/// A candidate solution: a fixed-length bit chromosome and its cached fitness.
///
/// The fitness is only refreshed by [`evaluate`](Individual::evaluate).
/// Operators that change the genes leave it stale until the next rescoring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Individual {
    genes: Vec<bool>,
    fitness: f64,
}

impl Individual {
    /// Creates an individual with a known fitness.
    pub fn new(genes: Vec<bool>, fitness: f64) -> Self {
        Self { genes, fitness }
    }

    /// Creates an individual and scores it with `oracle`.
    pub fn evaluated<O: FitnessOracle + ?Sized>(genes: Vec<bool>, oracle: &O) -> Self {
        let fitness = oracle.objective(&genes);
        Self { genes, fitness }
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Chromosome length.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Recomputes the fitness from the current genes.
    pub fn evaluate<O: FitnessOracle + ?Sized>(&mut self, oracle: &O) {
        self.fitness = oracle.objective(&self.genes);
    }

    /// Inverts gene `index`. Fitness is not updated.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [bool] {
        &mut self.genes
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &gene in &self.genes {
            f.write_str(if gene { "1" } else { "0" })?;
        }
        write!(f, " F: {}", self.fitness)
    }
}

/// An ordered collection of individuals.
///
/// Ordering by descending fitness is only guaranteed right after
/// [`sort_descending`](Population::sort_descending) or
/// [`rescore`](Population::rescore).
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn individuals_mut(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    /// First individual; the best one once the population is sorted.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.first()
    }

    /// Fitness of the last individual; the worst once sorted.
    pub fn worst_fitness(&self) -> Option<f64> {
        self.individuals.last().map(Individual::fitness)
    }

    /// Stable sort, best first.
    pub fn sort_descending(&mut self) {
        self.individuals
            .sort_by(|a, b| b.fitness.total_cmp(&a.fitness));
    }

    pub fn is_sorted_descending(&self) -> bool {
        self.individuals
            .windows(2)
            .all(|w| w[0].fitness >= w[1].fitness)
    }

    /// Re-evaluates every member with `oracle`, then sorts best first.
    pub fn rescore<O: FitnessOracle + ?Sized>(&mut self, oracle: &O) {
        for individual in &mut self.individuals {
            individual.evaluate(oracle);
        }
        self.sort_descending();
    }
}

impl Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<T: IntoIterator<Item = Individual>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for individual in &self.individuals {
            writeln!(f, "{individual}")?;
        }
        Ok(())
    }
}
