//! knapsack-ga: run the GA over the built-in knapsack datasets
//!
//! Prints one summary line per dataset, then the total elapsed time.

use anyhow::{bail, Context, Result};
use clap::Parser;
use knapsack_ga::experiment::{run_experiment, ExperimentConfig, ExperimentReport};
use knapsack_ga::ga::GaConfig;
use knapsack_ga::knapsack::DATASET_COUNT;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "knapsack-ga", version, about = "Genetic algorithm over 0/1 knapsack datasets")]
struct Cli {
    /// Datasets to run: a range like `1-15` or a list like `1,3,7`
    #[arg(long, default_value = "1-15")]
    datasets: String,

    /// Independent runs per dataset
    #[arg(long, default_value_t = 30)]
    runs: usize,

    /// Population size
    #[arg(long, default_value_t = 20)]
    population: usize,

    /// Generations per run
    #[arg(long, default_value_t = 1000)]
    generations: usize,

    /// Crossover probability
    #[arg(long, default_value_t = 0.85)]
    crossover: f64,

    /// Per-gene mutation probability
    #[arg(long, default_value_t = 0.03)]
    mutation: f64,

    /// Fraction of elites kept each generation
    #[arg(long, default_value_t = 0.05)]
    elitism: f64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Run repetitions sequentially
    #[arg(long)]
    sequential: bool,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ga = GaConfig::default()
        .with_population_size(cli.population)
        .with_generations(cli.generations)
        .with_crossover_rate(cli.crossover)
        .with_mutation_rate(cli.mutation)
        .with_elitism_rate(cli.elitism);
    ga.seed = cli.seed;

    let config = ExperimentConfig::default()
        .with_datasets(parse_datasets(&cli.datasets)?)
        .with_runs(cli.runs)
        .with_ga(ga)
        .with_parallel(!cli.sequential);

    let report = run_experiment(&config)?;

    match cli.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_text(report: &ExperimentReport) {
    for d in &report.datasets {
        let optimum = d
            .optimum
            .map_or_else(|| "-".to_string(), |o| o.to_string());
        println!(
            "Dataset: {} Optimum: {} Mean: {} Best: {} Worst: {}",
            d.dataset, optimum, d.summary.mean, d.summary.best, d.summary.worst
        );
    }
    println!("This took {:.2?}", report.elapsed);
}

/// Parses `1-15`, `4`, or `1,3,7` (ranges may appear inside lists).
fn parse_datasets(arg: &str) -> Result<Vec<usize>> {
    let mut datasets = Vec::new();
    for part in arg.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.split_once('-') {
            Some((lo, hi)) => {
                let lo: usize = lo.trim().parse().with_context(|| format!("bad range start in `{part}`"))?;
                let hi: usize = hi.trim().parse().with_context(|| format!("bad range end in `{part}`"))?;
                if lo > hi {
                    bail!("empty range `{part}`");
                }
                datasets.extend(lo..=hi);
            }
            None => datasets.push(part.parse().with_context(|| format!("bad dataset `{part}`"))?),
        }
    }
    if datasets.is_empty() {
        bail!("no datasets given (choose from 1-{DATASET_COUNT})");
    }
    Ok(datasets)
}
