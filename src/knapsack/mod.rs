//! 0/1 knapsack instances as GA fitness oracles.
//!
//! A chromosome holds one inclusion bit per item. Feasible selections
//! score their total value; selections over capacity score the negated
//! total value, so every infeasible solution ranks below every feasible
//! one with positive value.

mod datasets;

use crate::error::KnapsackError;
use crate::ga::FitnessOracle;
use datasets::DATASETS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of built-in datasets available through [`Knapsack::dataset`].
pub const DATASET_COUNT: usize = DATASETS.len();

/// A 0/1 knapsack instance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Knapsack {
    optimum: f64,
    capacity: f64,
    weights: Vec<f64>,
    values: Vec<f64>,
}

impl Knapsack {
    /// Creates an instance. `optimum` is the best known total value and is
    /// only used for reporting.
    pub fn new(
        optimum: f64,
        capacity: f64,
        weights: Vec<f64>,
        values: Vec<f64>,
    ) -> Result<Self, KnapsackError> {
        if weights.len() != values.len() {
            return Err(KnapsackError::LengthMismatch {
                weights: weights.len(),
                values: values.len(),
            });
        }
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(KnapsackError::InvalidCapacity(capacity));
        }
        Ok(Self {
            optimum,
            capacity,
            weights,
            values,
        })
    }

    /// Loads built-in dataset `index` (1-based).
    pub fn dataset(index: usize) -> Result<Self, KnapsackError> {
        let datasets: &[datasets::Instance] = &DATASETS;
        let instance = index
            .checked_sub(1)
            .and_then(|i| datasets.get(i))
            .ok_or(KnapsackError::UnknownDataset {
                index,
                max: DATASET_COUNT,
            })?;

        Self::new(
            instance.optimum,
            instance.capacity,
            instance.weights.to_vec(),
            instance.values.to_vec(),
        )
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of the weights of the selected items.
    pub fn total_weight(&self, genes: &[bool]) -> f64 {
        dot(genes, &self.weights)
    }

    /// Sum of the values of the selected items.
    pub fn total_value(&self, genes: &[bool]) -> f64 {
        dot(genes, &self.values)
    }

    pub fn is_feasible(&self, genes: &[bool]) -> bool {
        self.total_weight(genes) <= self.capacity
    }
}

impl FitnessOracle for Knapsack {
    fn chromosome_len(&self) -> usize {
        self.weights.len()
    }

    fn objective(&self, genes: &[bool]) -> f64 {
        let value = self.total_value(genes);
        if self.is_feasible(genes) {
            value
        } else {
            -value
        }
    }

    fn optimum(&self) -> Option<f64> {
        Some(self.optimum)
    }
}

fn dot(genes: &[bool], params: &[f64]) -> f64 {
    genes
        .iter()
        .zip(params)
        .filter(|&(&g, _)| g)
        .map(|(_, &p)| p)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_all_datasets_load() {
        for i in 1..=DATASET_COUNT {
            let k = Knapsack::dataset(i).unwrap();
            assert!(k.len() >= 4, "dataset {i} has {} items", k.len());
            assert_eq!(k.weights().len(), k.values().len());
            assert!(k.optimum().unwrap() > 0.0);
        }
    }

    #[test]
    fn test_dataset_sizes() {
        let sizes: Vec<usize> = (1..=DATASET_COUNT)
            .map(|i| Knapsack::dataset(i).unwrap().chromosome_len())
            .collect();
        assert_eq!(sizes, vec![10, 20, 4, 4, 15, 10, 7, 23, 5, 20, 30, 35, 40, 45, 50]);
    }

    #[test]
    fn test_unknown_dataset() {
        assert_eq!(
            Knapsack::dataset(0),
            Err(KnapsackError::UnknownDataset { index: 0, max: 15 })
        );
        assert_eq!(
            Knapsack::dataset(16),
            Err(KnapsackError::UnknownDataset { index: 16, max: 15 })
        );
    }

    #[test]
    fn test_feasible_scores_value() {
        let k = Knapsack::dataset(3).unwrap();
        // items 0, 1, 3: weight 18, value 35
        let g = bits("1101");
        assert_eq!(k.total_weight(&g), 18.0);
        assert!(k.is_feasible(&g));
        assert_eq!(k.objective(&g), 35.0);
    }

    #[test]
    fn test_capacity_is_inclusive() {
        let k = Knapsack::dataset(3).unwrap();
        // items 0, 1, 2: weight exactly 20
        assert_eq!(k.objective(&bits("1110")), 33.0);
    }

    #[test]
    fn test_overweight_is_penalized() {
        let k = Knapsack::dataset(3).unwrap();
        // everything: weight 27 > 20, value 48
        assert_eq!(k.objective(&bits("1111")), -48.0);
        assert_eq!(k.objective(&bits("0000")), 0.0);
    }

    #[test]
    fn test_known_optimum_reachable() {
        // dataset 3 is small enough to enumerate
        let k = Knapsack::dataset(3).unwrap();
        let best = (0u32..16)
            .map(|m| (0..4).map(|i| m & (1 << i) != 0).collect::<Vec<bool>>())
            .map(|g| k.objective(&g))
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(Some(best), k.optimum());
    }

    #[test]
    fn test_new_validates() {
        assert_eq!(
            Knapsack::new(1.0, 10.0, vec![1.0, 2.0], vec![1.0]),
            Err(KnapsackError::LengthMismatch {
                weights: 2,
                values: 1
            })
        );
        assert_eq!(
            Knapsack::new(1.0, -1.0, vec![1.0], vec![1.0]),
            Err(KnapsackError::InvalidCapacity(-1.0))
        );
        assert!(Knapsack::new(1.0, f64::INFINITY, vec![1.0], vec![1.0]).is_err());
    }
}
