//! # Stats Subcommand
//!
//! Per-origin tallies across the four status categories.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use visakit_core::VisaStatus;
use visakit_engine::aggregate;

use crate::{load_dataset, lookup_country, DocumentFlags};

/// Arguments for the `visakit stats` subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Origin country code (e.g. PK).
    #[arg(long = "from", value_name = "CODE")]
    pub origin: String,

    /// Emit the statistics as JSON instead of a table.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub documents: DocumentFlags,
}

/// Execute the stats subcommand. Returns the process exit code.
pub fn run_stats(args: &StatsArgs, dataset_path: Option<&Path>) -> Result<u8> {
    let dataset = load_dataset(dataset_path)?;
    let origin = lookup_country(&dataset, &args.origin)?;
    let countries = dataset.countries_by_name();
    let documents = args.documents.to_documents();

    let stats = aggregate(Some(origin), &countries, &dataset, &documents);

    if args.json {
        let json = serde_json::to_string_pretty(&stats).context("failed to encode statistics")?;
        println!("{json}");
        return Ok(0);
    }

    println!("Destinations from {} ({}):", origin.name, origin.code);
    for status in VisaStatus::all() {
        println!("  {:<16} {}", status.label(), stats.count(*status));
    }
    println!("  {:<16} {}", "Total", stats.total());

    Ok(0)
}
