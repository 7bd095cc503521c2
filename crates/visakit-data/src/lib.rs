//! # visakit-data — Dataset Layer
//!
//! Owns the static reference data the engine operates on: the country
//! registry and the bilateral requirement table, keyed by directional
//! `"ORIGIN->DEST"` route keys. Datasets load once at process start and
//! are read-only afterwards; no writer ever exists.
//!
//! Supports JSON and YAML dataset files, and bundles a default dataset
//! compiled into the binary.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod route;

pub use dataset::VisaDataset;
pub use error::{DatasetError, DatasetResult};
pub use route::{route_key, split_route_key, ROUTE_SEPARATOR};
