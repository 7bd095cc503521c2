//! # The Visa Dataset
//!
//! [`VisaDataset`] bundles the country registry and the bilateral
//! requirement table. It is loaded once and never mutated; every engine
//! operation borrows it read-only.
//!
//! No structural validation is performed on load: a requirement row
//! referencing an unknown country code, or a duplicate key, silently
//! produces absent lookups. Absence is meaningful throughout the engine
//! ("no data", conservatively treated as visa-required), so it is never
//! reported as an error.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use visakit_core::{Country, CountryCode, VisaRequirement};

use crate::error::{DatasetError, DatasetResult};
use crate::loader::{load_json_typed, load_yaml_typed};
use crate::route::route_key;

/// Default dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../data/visa_dataset.json");

/// The country registry plus the bilateral requirement table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisaDataset {
    /// Country code → country record.
    pub countries: HashMap<String, Country>,
    /// Directional route key (`"ORIGIN->DEST"`) → requirement record.
    pub requirements: HashMap<String, VisaRequirement>,
}

impl VisaDataset {
    /// Parse the dataset bundled into the binary.
    pub fn bundled() -> DatasetResult<Self> {
        serde_json::from_str(BUNDLED_DATASET).map_err(DatasetError::BundledCorrupt)
    }

    /// Load a dataset from a JSON or YAML file, dispatching on extension.
    ///
    /// `.yaml`/`.yml` files parse as YAML; anything else parses as JSON.
    pub fn load(path: &Path) -> DatasetResult<Self> {
        let dataset: Self = match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => load_yaml_typed(path)?,
            _ => load_json_typed(path)?,
        };
        tracing::info!(
            path = %path.display(),
            countries = dataset.countries.len(),
            requirements = dataset.requirements.len(),
            "loaded visa dataset"
        );
        Ok(dataset)
    }

    /// Look up the base requirement for an (origin, destination) route.
    ///
    /// Absence means "no data for this route", not an error.
    pub fn requirement(
        &self,
        origin: &CountryCode,
        dest: &CountryCode,
    ) -> Option<&VisaRequirement> {
        self.requirements.get(&route_key(origin, dest))
    }

    /// Look up a country by code.
    pub fn country(&self, code: &CountryCode) -> Option<&Country> {
        self.countries.get(code.as_str())
    }

    /// All countries sorted by display name.
    ///
    /// The registry is an unordered map; sorting gives the deterministic
    /// listing order the filter's stability guarantee is stated against.
    pub fn countries_by_name(&self) -> Vec<&Country> {
        let mut all: Vec<&Country> = self.countries.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}
