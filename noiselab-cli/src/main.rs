//! NoiseLab CLI — noise-resilience evaluation commands.
//!
//! Commands:
//! - `run` — evaluate strategies against a CSV price file across a noise
//!   ladder, print one result table per strategy, optionally write JSON
//! - `strategies` — list the recognized strategy names

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use noiselab_core::StrategySpec;
use noiselab_runner::{load_close_series, run_evaluation, EvalConfig, EvaluationReport};

#[derive(Parser)]
#[command(
    name = "noiselab",
    about = "NoiseLab CLI — Monte Carlo noise-resilience harness for trading strategies"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate strategies against historical prices across a noise ladder.
    Run {
        /// CSV file with a `close` (or `price`) column.
        #[arg(long)]
        csv: PathBuf,

        /// TOML sweep config. Explicit flags below override its fields.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Strategy to evaluate (repeatable). Defaults to all three.
        #[arg(long = "strategy")]
        strategies: Vec<String>,

        /// Noise level to sweep (repeatable). Defaults to 0.01 0.05 0.1 0.2.
        #[arg(long = "noise-level")]
        noise_levels: Vec<f64>,

        /// Independent trials per noise level. Defaults to 1000.
        #[arg(long)]
        trials: Option<usize>,

        /// Master seed for reproducible reports. Defaults to 42.
        #[arg(long)]
        seed: Option<u64>,

        /// Directory for JSON reports (one file per strategy).
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
    /// List the recognized strategy names.
    Strategies,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            csv,
            config,
            strategies,
            noise_levels,
            trials,
            seed,
            output_dir,
        } => run_cmd(csv, config, strategies, noise_levels, trials, seed, output_dir),
        Commands::Strategies => {
            for name in StrategySpec::KNOWN_NAMES {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn run_cmd(
    csv: PathBuf,
    config_path: Option<PathBuf>,
    strategies: Vec<String>,
    noise_levels: Vec<f64>,
    trials: Option<usize>,
    seed: Option<u64>,
    output_dir: Option<PathBuf>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) => EvalConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EvalConfig::default(),
    };
    if !strategies.is_empty() {
        config.strategies = strategies;
    }
    if !noise_levels.is_empty() {
        config.noise_levels = noise_levels;
    }
    if let Some(trials) = trials {
        config.trials = trials;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }

    let series = load_close_series(&csv)
        .with_context(|| format!("loading prices from {}", csv.display()))?;
    println!(
        "Loaded {} prices from {} ({} trials per noise level, seed {})",
        series.len(),
        csv.display(),
        config.trials,
        config.seed
    );

    if let Some(dir) = &output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    for name in &config.strategies {
        println!("\nEvaluating {name} strategy");
        let report = run_evaluation(name, &series, &config)?;
        print_table(&report);

        if let Some(dir) = &output_dir {
            let path = dir.join(format!("{name}.json"));
            let json = serde_json::to_string_pretty(&report)?;
            std::fs::write(&path, json)
                .with_context(|| format!("writing report {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}

fn print_table(report: &EvaluationReport) {
    println!(
        "{:>11}  {:>11}  {:>12}  {:>12}  {:>16}",
        "Noise Level", "Mean Profit", "Max Drawdown", "Sharpe Ratio", "Resilience Index"
    );
    for row in &report.rows {
        println!(
            "{:>11.4}  {:>11.4}  {:>12.4}  {:>12.4}  {:>16.4}",
            row.noise_level,
            row.mean_profit,
            row.max_drawdown,
            row.sharpe_ratio,
            row.resilience_index
        );
    }
}
