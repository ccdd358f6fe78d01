//! Fitness-proportionate (roulette wheel) selection.
//!
//! Parents are drawn in pairs, without replacement within a pair. Weights
//! come from [`selection_weights`], which shifts fitness so the worst member
//! of the population weighs zero. Knapsack fitness can be negative, so raw
//! fitness cannot be used as a roulette weight directly.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::{Individual, Population};
use rand::Rng;

/// Roulette weights for a population: `fitness - worst`, where `worst` is the
/// fitness of the last member.
///
/// The population is expected to be sorted best first, which makes every
/// weight non-negative. Stored fitness values are left untouched.
pub fn selection_weights(population: &Population) -> Vec<f64> {
    let worst = population.worst_fitness().unwrap_or(0.0);
    population
        .iter()
        .map(Individual::fitness)
        .map(|f| f - worst)
        .collect()
}

/// Draws two distinct indices with probability proportional to `weights`.
///
/// The first draw spans all candidates. The second excludes the first
/// pick and renormalizes over the rest. When the eligible weights sum to
/// exactly zero, the draw is uniform over the eligible candidates.
///
/// # Complexity
/// O(n) per pair
///
/// # Panics
/// Panics if fewer than two weights are given.
pub fn roulette_pair<R: Rng>(weights: &[f64], rng: &mut R) -> (usize, usize) {
    assert!(
        weights.len() >= 2,
        "roulette selection needs at least two candidates"
    );

    let first = roulette_draw(weights, None, rng);
    let second = roulette_draw(weights, Some(first), rng);
    (first, second)
}

/// One spin of the wheel, skipping index `skip` if set.
fn roulette_draw<R: Rng>(weights: &[f64], skip: Option<usize>, rng: &mut R) -> usize {
    let eligible = || {
        weights
            .iter()
            .enumerate()
            .filter(move |&(i, _)| Some(i) != skip)
    };

    let total: f64 = eligible().map(|(_, &w)| w).sum();
    let count = eligible().count();

    let r: f64 = rng.random();
    let mut cumulative = 0.0;
    let mut last = 0;
    for (i, &w) in eligible() {
        cumulative += if total == 0.0 {
            1.0 / count as f64
        } else {
            w / total
        };
        if r < cumulative {
            return i;
        }
        last = i;
    }

    last // floating-point fallback
}
