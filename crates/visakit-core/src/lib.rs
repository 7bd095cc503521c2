//! # visakit-core — Foundational Types for visakit
//!
//! Defines the reference-data and record types shared by every other crate
//! in the workspace: countries and their regions, bilateral visa
//! requirement records, the traveler's held documents, and the derived
//! visa status taxonomy. Every other crate depends on `visakit-core`; it
//! depends on nothing internal.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `visakit-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod country;
pub mod documents;
pub mod error;
pub mod region;
pub mod requirement;
pub mod statistics;
pub mod status;

// Re-export primary types for ergonomic imports.
pub use country::{Country, CountryCode};
pub use documents::TravelDocuments;
pub use error::VisakitError;
pub use region::Region;
pub use requirement::VisaRequirement;
pub use statistics::VisaStatistics;
pub use status::VisaStatus;
