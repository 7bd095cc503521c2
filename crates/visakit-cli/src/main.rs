//! # visakit CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use visakit_cli::check::{run_check, CheckArgs};
use visakit_cli::list::{run_list, ListArgs};
use visakit_cli::stats::{run_stats, StatsArgs};

/// visakit — visa requirement lookup
///
/// Reports whether a visa is required between an origin and a destination
/// country, adjusted for travel documents the traveler already holds, and
/// provides per-origin statistics and filtered destination listings.
#[derive(Parser, Debug)]
#[command(name = "visakit", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a JSON or YAML dataset file (defaults to the bundled one).
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the visa requirement and status for one route.
    Check(CheckArgs),

    /// Tally destinations by visa status for an origin.
    Stats(StatsArgs),

    /// List destinations, optionally filtered by query, region, and status.
    List(ListArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let dataset_path = cli.dataset.as_deref();

    let result = match cli.command {
        Commands::Check(args) => run_check(&args, dataset_path),
        Commands::Stats(args) => run_stats(&args, dataset_path),
        Commands::List(args) => run_list(&args, dataset_path),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
