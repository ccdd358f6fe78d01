//! Repeated GA runs over knapsack datasets.
//!
//! Each dataset gets its own oracle and a GA configuration sized for it.
//! The GA is run `runs` times and the best fitness of every run is reduced
//! to mean, best and worst. Runs are independent, so with the `parallel`
//! feature they are spread over rayon's thread pool.

use crate::error::{ExperimentError, GaError};
use crate::ga::{FitnessOracle, GaConfig, GaRunner};
use crate::knapsack::{Knapsack, DATASET_COUNT};
use std::time::{Duration, Instant};
use tracing::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Harness configuration.
///
/// `ga.chromosome_len` is ignored: it is taken from each dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExperimentConfig {
    /// Built-in dataset indices (1-based) to run.
    pub datasets: Vec<usize>,

    /// Independent repetitions per dataset.
    pub runs: usize,

    /// GA parameters shared by every run.
    pub ga: GaConfig,

    /// Whether to run repetitions in parallel (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            datasets: (1..=DATASET_COUNT).collect(),
            runs: 30,
            ga: GaConfig::default(),
            parallel: true,
        }
    }
}

impl ExperimentConfig {
    pub fn with_datasets(mut self, datasets: Vec<usize>) -> Self {
        self.datasets = datasets;
        self
    }

    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    pub fn with_ga(mut self, ga: GaConfig) -> Self {
        self.ga = ga;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Mean, best and worst of a set of fitness values.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Summary {
    pub mean: f64,
    pub best: f64,
    pub worst: f64,
}

/// Reduces `values` to mean, maximum and minimum. `None` when empty.
pub fn summarize(values: &[f64]) -> Option<Summary> {
    let (&first, _) = values.split_first()?;
    let (best, worst, total) = values.iter().fold(
        (first, first, 0.0),
        |(best, worst, total), &v| (best.max(v), worst.min(v), total + v),
    );
    Some(Summary {
        mean: total / values.len() as f64,
        best,
        worst,
    })
}

/// Outcome of all runs on one dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DatasetReport {
    pub dataset: usize,
    pub optimum: Option<f64>,
    pub chromosome_len: usize,
    pub runs: usize,
    pub summary: Summary,
}

/// Outcome of a whole experiment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExperimentReport {
    pub datasets: Vec<DatasetReport>,

    /// Wall-clock time for all datasets.
    pub elapsed: Duration,
}

/// Runs the GA `runs` times against `oracle` and returns each run's best
/// fitness, in run order.
///
/// When `config.seed` is set, run `i` is seeded with `seed + i`.
pub fn repeat_runs<O: FitnessOracle>(
    oracle: &O,
    config: &GaConfig,
    runs: usize,
    parallel: bool,
) -> Result<Vec<f64>, GaError> {
    let run_once = |i: usize| -> Result<f64, GaError> {
        let mut config = config.clone();
        config.seed = config.seed.map(|s| s.wrapping_add(i as u64));
        Ok(GaRunner::new(oracle, config)?.run().fitness())
    };

    #[cfg(feature = "parallel")]
    if parallel {
        return (0..runs).into_par_iter().map(run_once).collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    (0..runs).map(run_once).collect()
}

/// Runs every repetition for one oracle and summarizes the results.
pub fn run_oracle<O: FitnessOracle>(
    dataset: usize,
    oracle: &O,
    config: &ExperimentConfig,
) -> Result<DatasetReport, ExperimentError> {
    let ga = config.ga.clone().with_chromosome_len(oracle.chromosome_len());
    let results = repeat_runs(oracle, &ga, config.runs, config.parallel)?;
    let summary = summarize(&results).ok_or(ExperimentError::NoRuns)?;

    let report = DatasetReport {
        dataset,
        optimum: oracle.optimum(),
        chromosome_len: oracle.chromosome_len(),
        runs: results.len(),
        summary,
    };
    info!(
        dataset,
        optimum = ?report.optimum,
        mean = summary.mean,
        best = summary.best,
        worst = summary.worst,
        "dataset finished"
    );
    Ok(report)
}

/// Runs the configured experiment over the built-in datasets.
pub fn run_experiment(config: &ExperimentConfig) -> Result<ExperimentReport, ExperimentError> {
    if config.runs == 0 {
        return Err(ExperimentError::NoRuns);
    }

    let start = Instant::now();
    let datasets = config
        .datasets
        .iter()
        .map(|&index| -> Result<DatasetReport, ExperimentError> {
            let knapsack = Knapsack::dataset(index)?;
            run_oracle(index, &knapsack, config)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExperimentReport {
        datasets,
        elapsed: start.elapsed(),
    })
}
