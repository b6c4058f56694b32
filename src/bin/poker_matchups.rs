use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

use poker_matchups::matchup::{
    MAX_PER_CATEGORY, Manifest, MatchupError, MatchupStore, ShowdownSimulator, SimulationConfig,
    clear_output_dir,
};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "poker-matchups")]
#[command(about = "Sample heads up showdowns into outcome categories")]
struct Cli {
    /// Directory holding matchups.json and hand-categories.ts
    #[arg(short, long, global = true, default_value = "output")]
    output: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate showdowns and add them to the store
    Simulate {
        /// Number of showdowns. Anything that isn't a positive number runs once.
        #[arg(default_value = "1", allow_hyphen_values = true)]
        runs: String,
        /// Samples kept per category
        #[arg(short, long, default_value_t = MAX_PER_CATEGORY)]
        cap: usize,
        /// Seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Regenerate hand-categories.ts from the store
    Manifest,
    /// Delete every file in the output directory
    Clear,
}

/// Lenient run count. Fractions round up, anything that isn't a finite
/// positive number gives a single run.
fn parse_runs(arg: &str) -> usize {
    match arg.trim().parse::<f64>() {
        Ok(runs) if runs.is_finite() && runs > 0.0 => runs.ceil() as usize,
        _ => 1,
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Simulate { runs, cap, seed } => simulate(SimulationConfig {
            runs: parse_runs(&runs),
            cap,
            output_dir: cli.output,
            seed,
        }),
        Commands::Manifest => write_manifest(&SimulationConfig {
            output_dir: cli.output,
            ..SimulationConfig::default()
        }),
        Commands::Clear => clear_output_dir(&cli.output).map(|_| ()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            event!(Level::ERROR, error = %e, "poker-matchups failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn simulate(config: SimulationConfig) -> Result<(), MatchupError> {
    let start = Instant::now();
    let mut store = MatchupStore::load(&config.store_path())?;

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let summary = ShowdownSimulator::new(rng).run(&mut store, config.runs, config.cap)?;

    store.save(&config.store_path())?;
    Manifest::from_store(&store).write(&config.manifest_path())?;

    println!(
        "Saved matchups and updated {} ({} showdowns, {} new samples, {} ms)",
        config.manifest_path().display(),
        summary.showdowns,
        summary.inserted,
        start.elapsed().as_millis()
    );
    if summary.anomalies > 0 {
        println!(
            "Warning: {} showdowns had a winner but no deciding card",
            summary.anomalies
        );
    }
    Ok(())
}

fn write_manifest(config: &SimulationConfig) -> Result<(), MatchupError> {
    let store = MatchupStore::load(&config.store_path())?;
    Manifest::from_store(&store).write(&config.manifest_path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_runs() {
        assert_eq!(1000, parse_runs("1000"));
        assert_eq!(3, parse_runs("2.5"));
        assert_eq!(1, parse_runs("abc"));
        assert_eq!(1, parse_runs("-5"));
        assert_eq!(1, parse_runs("0"));
        assert_eq!(1, parse_runs("NaN"));
        assert_eq!(1, parse_runs("inf"));
    }

    #[test]
    fn test_cli_accepts_any_runs() {
        let cli = Cli::try_parse_from(["poker-matchups", "simulate", "lots"]).unwrap();
        match cli.command {
            Commands::Simulate { runs, .. } => assert_eq!(1, parse_runs(&runs)),
            _ => panic!("expected simulate"),
        }
    }
}
