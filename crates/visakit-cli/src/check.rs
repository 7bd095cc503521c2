//! # Check Subcommand
//!
//! Resolves one (origin, destination) route: base lookup, waiver
//! adjustment for held documents, and classification. "No data" is
//! surfaced as information-not-available, distinct from an explicit
//! visa-required determination.

use std::path::Path;

use anyhow::Result;
use clap::Args;

use visakit_engine::{classify, resolve_requirement};

use crate::{load_dataset, lookup_country, DocumentFlags};

/// Arguments for the `visakit check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Origin country code (e.g. PK).
    #[arg(long = "from", value_name = "CODE")]
    pub origin: String,

    /// Destination country code (e.g. AL).
    #[arg(long = "to", value_name = "CODE")]
    pub destination: String,

    #[command(flatten)]
    pub documents: DocumentFlags,
}

/// Execute the check subcommand. Returns the process exit code.
pub fn run_check(args: &CheckArgs, dataset_path: Option<&Path>) -> Result<u8> {
    let dataset = load_dataset(dataset_path)?;
    let origin = lookup_country(&dataset, &args.origin)?;
    let destination = lookup_country(&dataset, &args.destination)?;
    let documents = args.documents.to_documents();

    println!(
        "Route: {} ({}) -> {} ({})",
        origin.name, origin.code, destination.name, destination.code
    );

    let Some(requirement) = resolve_requirement(origin, destination, &dataset, &documents) else {
        println!("Status: information not available");
        println!("No entry for this route; assume a visa is required and confirm with the embassy.");
        return Ok(0);
    };

    let status = classify(Some(&requirement));
    println!("Status: {}", status.label());
    println!("Visa required: {}", yes_no(requirement.visa_required));
    println!("Visa on arrival: {}", yes_no(requirement.visa_on_arrival));
    print_optional("Duration", requirement.duration.as_deref());
    print_optional("Processing time", requirement.processing_time.as_deref());
    print_optional("Cost", requirement.cost.as_deref());
    print_optional("Notes", requirement.notes.as_deref());
    if let Some(items) = &requirement.requirements {
        println!("Requirements:");
        for item in items {
            println!("  - {item}");
        }
    }

    Ok(0)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn print_optional(label: &str, value: Option<&str>) {
    println!("{label}: {}", value.unwrap_or("not available"));
}
