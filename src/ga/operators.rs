//! Genetic operators for boolean chromosomes.
//!
//! These are plain functions over [`Individual`] and [`Population`]; the
//! generic random source is passed in explicitly.
//!
//! # Initialization
//!
//! - [`random_individual`]: uniform random bits, scored immediately
//! - [`random_population`]: `n` random individuals, sorted best first
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: exchange the prefix before a random
//!   interior cut point
//!
//! # Mutation
//!
//! - [`bit_flip_mutation`]: flip each gene independently with a fixed probability
//!
//! # Replacement
//!
//! - [`elitism`]: keep the top of the old population, fill the rest with offspring

use super::types::{FitnessOracle, Individual, Population};
use rand::Rng;

// ============================================================================
// Initialization
// ============================================================================

/// Creates an individual with `n_genes` uniform random bits and scores it.
pub fn random_individual<O, R>(oracle: &O, n_genes: usize, rng: &mut R) -> Individual
where
    O: FitnessOracle + ?Sized,
    R: Rng,
{
    let genes: Vec<bool> = (0..n_genes).map(|_| rng.random()).collect();
    Individual::evaluated(genes, oracle)
}

/// Creates `size` random individuals, sorted by descending fitness.
pub fn random_population<O, R>(oracle: &O, size: usize, n_genes: usize, rng: &mut R) -> Population
where
    O: FitnessOracle + ?Sized,
    R: Rng,
{
    let mut population: Population = (0..size)
        .map(|_| random_individual(oracle, n_genes, rng))
        .collect();
    population.sort_descending();
    population
}

// ============================================================================
// Crossover
// ============================================================================

/// Draws a cut point uniformly from `[1, n_genes - 1]`.
///
/// # Panics
/// Panics if `n_genes < 2`.
pub fn crossover_point<R: Rng>(n_genes: usize, rng: &mut R) -> usize {
    assert!(n_genes >= 2, "crossover needs at least two genes");
    rng.random_range(1..n_genes)
}

/// Single-point crossover at a random interior point.
///
/// See [`crossover_at`].
pub fn single_point_crossover<R: Rng>(
    first: &Individual,
    second: &Individual,
    rng: &mut R,
) -> (Individual, Individual) {
    let point = crossover_point(first.len(), rng);
    crossover_at(first, second, point)
}

/// Returns copies of both parents with the genes before `point` exchanged.
///
/// Each child keeps the parent's fitness, which is stale until rescored.
///
/// # Complexity
/// O(point)
///
/// # Panics
/// Panics if parents have different lengths or `point` exceeds their length.
pub fn crossover_at(first: &Individual, second: &Individual, point: usize) -> (Individual, Individual) {
    assert_eq!(first.len(), second.len(), "parents must have equal length");

    let mut a = first.clone();
    let mut b = second.clone();
    a.genes_mut()[..point].swap_with_slice(&mut b.genes_mut()[..point]);
    (a, b)
}

// ============================================================================
// Mutation
// ============================================================================

/// Flips each gene independently with probability `rate`.
///
/// Fitness is not updated. Returns the number of flipped genes.
pub fn bit_flip_mutation<R: Rng>(individual: &mut Individual, rate: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for gene in individual.genes_mut() {
        if rng.random::<f64>() < rate {
            *gene = !*gene;
            flipped += 1;
        }
    }
    flipped
}

// ============================================================================
// Replacement
// ============================================================================

/// Keeps the first `n_elites` members of `population` and overwrites the
/// remaining slots with the leading members of `offspring`.
///
/// `population` should be sorted so its head holds the fittest individuals.
/// The merged result is left unsorted.
///
/// # Panics
/// Panics if `offspring` has fewer than `population.len() - n_elites` members.
pub fn elitism(population: &mut Population, offspring: &Population, n_elites: usize) {
    let n_elites = n_elites.min(population.len());
    let tail = &mut population.individuals_mut()[n_elites..];
    let fill = &offspring.individuals()[..tail.len()];
    tail.clone_from_slice(fill);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug)]
    struct CountOnes(usize);

    impl FitnessOracle for CountOnes {
        fn chromosome_len(&self) -> usize {
            self.0
        }
        fn objective(&self, genes: &[bool]) -> f64 {
            genes.iter().filter(|&&g| g).count() as f64
        }
    }

    fn ind(bits: &str, fitness: f64) -> Individual {
        Individual::new(bits.chars().map(|c| c == '1').collect(), fitness)
    }

    #[test]
    fn test_random_individual_is_scored() {
        let mut rng = StdRng::seed_from_u64(42);
        let oracle = CountOnes(16);
        let i = random_individual(&oracle, 16, &mut rng);
        assert_eq!(i.len(), 16);
        assert_eq!(i.fitness(), oracle.objective(i.genes()));
    }

    #[test]
    fn test_random_population_sorted() {
        let mut rng = StdRng::seed_from_u64(42);
        let pop = random_population(&CountOnes(8), 25, 8, &mut rng);
        assert_eq!(pop.len(), 25);
        assert!(pop.is_sorted_descending());
        assert!(pop.iter().all(|i| i.len() == 8));
    }

    #[test]
    fn test_random_bits_are_balanced() {
        let mut rng = StdRng::seed_from_u64(1);
        let i = random_individual(&CountOnes(10_000), 10_000, &mut rng);
        let ones = i.fitness();
        assert!((4500.0..5500.0).contains(&ones), "got {ones} ones");
    }

    #[test]
    fn test_crossover_point_interior() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 5];
        for _ in 0..2000 {
            let p = crossover_point(5, &mut rng);
            assert!((1..=4).contains(&p));
            seen[p] = true;
        }
        assert_eq!(seen, [false, true, true, true, true]);
    }

    #[test]
    fn test_crossover_point_two_genes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(crossover_point(2, &mut rng), 1);
        }
    }

    #[test]
    fn test_crossover_at_swaps_prefix() {
        let a = ind("11111", 5.0);
        let b = ind("00000", 0.0);
        let (c, d) = crossover_at(&a, &b, 2);
        assert_eq!(c, ind("00111", 5.0));
        assert_eq!(d, ind("11000", 0.0));
        // parents untouched
        assert_eq!(a.genes(), &[true; 5]);
        assert_eq!(b.genes(), &[false; 5]);
    }

    #[test]
    fn test_single_point_crossover_keeps_loci() {
        let mut rng = StdRng::seed_from_u64(9);
        let a = ind("1100110011", 0.0);
        let b = ind("0101010101", 0.0);
        for _ in 0..100 {
            let (c, d) = single_point_crossover(&a, &b, &mut rng);
            assert_eq!(c.len(), 10);
            for i in 0..10 {
                let mut pair = [c.genes()[i], d.genes()[i]];
                let mut parents = [a.genes()[i], b.genes()[i]];
                pair.sort();
                parents.sort();
                assert_eq!(pair, parents);
            }
        }
    }

    #[test]
    #[should_panic(expected = "crossover needs at least two genes")]
    fn test_crossover_single_gene_panics() {
        let mut rng = StdRng::seed_from_u64(42);
        crossover_point(1, &mut rng);
    }

    #[test]
    fn test_mutation_rate_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut i = ind("1010", 2.0);

        assert_eq!(bit_flip_mutation(&mut i, 0.0, &mut rng), 0);
        assert_eq!(i, ind("1010", 2.0));

        assert_eq!(bit_flip_mutation(&mut i, 1.0, &mut rng), 4);
        assert_eq!(i, ind("0101", 2.0));
    }

    #[test]
    fn test_mutation_rate_statistics() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut i = Individual::new(vec![false; 10_000], 0.0);
        let flipped = bit_flip_mutation(&mut i, 0.1, &mut rng);
        assert!((800..1200).contains(&flipped), "flipped {flipped}");
    }

    #[test]
    fn test_elitism_keeps_head() {
        let mut pop = Population::new(vec![
            ind("111", 3.0),
            ind("110", 2.0),
            ind("100", 1.0),
            ind("000", 0.0),
        ]);
        let offspring = Population::new(vec![
            ind("001", 1.0),
            ind("011", 2.0),
            ind("101", 2.0),
            ind("010", 1.0),
        ]);

        elitism(&mut pop, &offspring, 1);

        assert_eq!(pop.len(), 4);
        assert_eq!(pop[0], ind("111", 3.0));
        assert_eq!(pop[1], ind("001", 1.0));
        assert_eq!(pop[2], ind("011", 2.0));
        assert_eq!(pop[3], ind("101", 2.0));
    }

    #[test]
    fn test_elitism_all_elites() {
        let mut pop = Population::new(vec![ind("11", 2.0), ind("10", 1.0)]);
        let before = pop.clone();
        elitism(&mut pop, &Population::new(vec![ind("00", 0.0); 2]), 5);
        assert_eq!(pop, before);
    }

    #[test]
    fn test_elitism_no_elites() {
        let mut pop = Population::new(vec![ind("11", 2.0), ind("10", 1.0)]);
        let offspring = Population::new(vec![ind("00", 0.0), ind("01", 1.0)]);
        elitism(&mut pop, &offspring, 0);
        assert_eq!(pop, offspring);
    }
}
