//! # visakit-cli — Command-Line Interface
//!
//! The thin consumer standing in for a presentation layer. All decision
//! logic lives in `visakit-engine`; this crate parses flags, loads the
//! dataset, and renders results.
//!
//! ## Subcommands
//!
//! - `visakit check` — requirement and status for one route.
//! - `visakit stats` — per-origin counts across the four categories.
//! - `visakit list` — filtered destination listing.

pub mod check;
pub mod list;
pub mod stats;

use std::path::Path;

use anyhow::Context;
use clap::Args;

use visakit_core::{Country, CountryCode, TravelDocuments};
use visakit_data::VisaDataset;

/// Load the dataset named by `--dataset`, or the bundled one.
pub fn load_dataset(path: Option<&Path>) -> anyhow::Result<VisaDataset> {
    match path {
        Some(path) => VisaDataset::load(path)
            .with_context(|| format!("failed to load dataset from {}", path.display())),
        None => VisaDataset::bundled().context("failed to parse bundled dataset"),
    }
}

/// Resolve a country code argument against the dataset registry.
pub fn lookup_country<'a>(dataset: &'a VisaDataset, code: &str) -> anyhow::Result<&'a Country> {
    let code = CountryCode::from(code);
    dataset
        .country(&code)
        .with_context(|| format!("unknown country code: {code}"))
}

/// Travel documents the traveler asserts holding, shared by every
/// subcommand.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DocumentFlags {
    /// Traveler holds a valid multi-entry US visa.
    #[arg(long)]
    pub us_visa: bool,

    /// Traveler holds a valid multi-entry UK visa.
    #[arg(long)]
    pub uk_visa: bool,

    /// Traveler holds a valid multi-entry Schengen visa.
    #[arg(long)]
    pub schengen_visa: bool,

    /// Traveler holds a UAE residency permit.
    #[arg(long)]
    pub uae_residency: bool,
}

impl DocumentFlags {
    /// Convert the flags into the engine's document record.
    pub fn to_documents(self) -> TravelDocuments {
        TravelDocuments {
            us_visa: self.us_visa,
            uk_visa: self.uk_visa,
            schengen_visa: self.schengen_visa,
            uae_residency: self.uae_residency,
        }
    }
}
