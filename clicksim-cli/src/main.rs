//! clicksim CLI — simulate clicks on slates from a click-model config.
//!
//! Commands:
//! - `simulate` — click every slate in a JSON file and write the clicked slates
//! - `validate` — load and build a click-model config without running it
//! - `stats` — simulate and print click statistics as JSON

mod tracing_setup;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use clicksim_core::{create_click_model, ClickModel, ClickModelConfig};
use clicksim_runner::{
    load_slates, save_clicked, simulate_clicks, ClickStatistics, SimulationConfig,
};
use tracing_setup::{init_subscriber, Verbosity};

#[derive(Parser)]
#[command(name = "clicksim", about = "clicksim — simulated clicks for learning-to-rank")]
struct Cli {
    /// Debug-level logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Errors only.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate clicks on every slate and write them as JSON.
    Simulate {
        /// Click-model config (.toml or .json).
        #[arg(long)]
        model: PathBuf,

        /// JSON array of slates.
        #[arg(long)]
        input: PathBuf,

        /// Output file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,

        /// Master seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Simulation round (e.g. epoch); changes draws for the same seed.
        #[arg(long, default_value_t = 0)]
        iteration: u64,

        /// Keep slates that received no clicks.
        #[arg(long, default_value_t = false)]
        include_empty: bool,

        /// Run on a single thread.
        #[arg(long, default_value_t = false)]
        sequential: bool,
    },
    /// Load and build a click-model config.
    Validate {
        /// Click-model config (.toml or .json).
        #[arg(long)]
        model: PathBuf,
    },
    /// Simulate and print click statistics as JSON.
    Stats {
        /// Click-model config (.toml or .json).
        #[arg(long)]
        model: PathBuf,

        /// JSON array of slates.
        #[arg(long)]
        input: PathBuf,

        /// Master seed.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Simulation round; use the value passed to `simulate --iteration`.
        #[arg(long, default_value_t = 0)]
        iteration: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet));

    match cli.command {
        Commands::Simulate {
            model,
            input,
            output,
            seed,
            iteration,
            include_empty,
            sequential,
        } => {
            let config = SimulationConfig::default()
                .with_seed(seed)
                .with_iteration(iteration)
                .with_include_empty(include_empty)
                .with_parallelism(!sequential);
            run_simulate(&model, &input, output.as_deref(), &config)
        }
        Commands::Validate { model } => run_validate(&model),
        Commands::Stats {
            model,
            input,
            seed,
            iteration,
        } => {
            let config = SimulationConfig::default()
                .with_seed(seed)
                .with_iteration(iteration)
                .with_include_empty(true);
            run_stats(&model, &input, &config)
        }
    }
}

fn build_model(path: &Path) -> Result<(ClickModelConfig, Box<dyn ClickModel>)> {
    let config = ClickModelConfig::load(path)
        .with_context(|| format!("loading click model from {}", path.display()))?;
    let model = create_click_model(&config)
        .with_context(|| format!("building click model from {}", path.display()))?;
    tracing::debug!(model = model.name(), depth = config.depth(), "built click model");
    Ok((config, model))
}

fn run_simulate(
    model_path: &Path,
    input: &Path,
    output: Option<&Path>,
    config: &SimulationConfig,
) -> Result<()> {
    let (_, model) = build_model(model_path)?;
    let slates = load_slates(input)?;
    let clicked = simulate_clicks(model.as_ref(), &slates, config)?;

    match output {
        Some(path) => {
            save_clicked(path, &clicked)?;
            eprintln!(
                "Wrote {} of {} slates to {}",
                clicked.len(),
                slates.len(),
                path.display()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&clicked)?),
    }
    Ok(())
}

fn run_validate(model_path: &Path) -> Result<()> {
    let (config, model) = build_model(model_path)?;
    println!(
        "OK: {} (depth {}) from {}",
        model.name(),
        config.depth(),
        model_path.display()
    );
    Ok(())
}

fn run_stats(model_path: &Path, input: &Path, config: &SimulationConfig) -> Result<()> {
    let (_, model) = build_model(model_path)?;
    let slates = load_slates(input)?;
    let clicked = simulate_clicks(model.as_ref(), &slates, config)?;
    let stats = ClickStatistics::from_clicked(&clicked);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn simulate_defaults() {
        let cli = Cli::parse_from([
            "clicksim", "simulate", "--model", "m.toml", "--input", "s.json",
        ]);
        match cli.command {
            Commands::Simulate {
                seed,
                iteration,
                include_empty,
                sequential,
                output,
                ..
            } => {
                assert_eq!(seed, 42);
                assert_eq!(iteration, 0);
                assert!(!include_empty);
                assert!(!sequential);
                assert!(output.is_none());
            }
            _ => panic!("expected simulate"),
        }
    }

    #[test]
    fn stats_accepts_iteration() {
        let cli = Cli::parse_from([
            "clicksim", "stats", "--model", "m.toml", "--input", "s.json", "--seed", "7",
            "--iteration", "3",
        ]);
        match cli.command {
            Commands::Stats {
                seed, iteration, ..
            } => {
                assert_eq!(seed, 7);
                assert_eq!(iteration, 3);
            }
            _ => panic!("expected stats"),
        }

        let cli = Cli::parse_from(["clicksim", "stats", "--model", "m.toml", "--input", "s.json"]);
        match cli.command {
            Commands::Stats { iteration, .. } => assert_eq!(iteration, 0),
            _ => panic!("expected stats"),
        }
    }
}
