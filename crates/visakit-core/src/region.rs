//! # World Regions
//!
//! The `Region` enum is the single closed enumeration of world regions in
//! the dataset. Every `match` on `Region` must be exhaustive — adding a
//! region forces every consumer to handle it at compile time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::VisakitError;

/// The fixed set of world regions countries are grouped into.
///
/// Serialization uses the display names carried by the dataset
/// (`"Middle East"` rather than `"MiddleEast"`), so records round-trip
/// byte-identically through JSON and YAML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Asia excluding the Middle East.
    Asia,
    /// The Middle East.
    #[serde(rename = "Middle East")]
    MiddleEast,
    /// Europe, Schengen and non-Schengen alike.
    Europe,
    /// North, Central, and South America plus the Caribbean.
    Americas,
    /// Africa.
    Africa,
    /// Oceania.
    Oceania,
}

/// Total number of regions. Used for exhaustiveness assertions in tests.
pub const REGION_COUNT: usize = 6;

impl Region {
    /// Returns all regions in canonical order.
    pub fn all() -> &'static [Region] {
        &[
            Self::Asia,
            Self::MiddleEast,
            Self::Europe,
            Self::Americas,
            Self::Africa,
            Self::Oceania,
        ]
    }

    /// Returns the display name for this region.
    ///
    /// This must match the serde serialization format and the region
    /// strings in the bundled dataset.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asia => "Asia",
            Self::MiddleEast => "Middle East",
            Self::Europe => "Europe",
            Self::Americas => "Americas",
            Self::Africa => "Africa",
            Self::Oceania => "Oceania",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = VisakitError;

    /// Parse a region from its display name.
    ///
    /// Also accepts lowercase/kebab aliases (`"middle-east"`) so the CLI
    /// `--region` flag does not force shell quoting.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Asia" | "asia" => Ok(Self::Asia),
            "Middle East" | "middle-east" | "middle east" => Ok(Self::MiddleEast),
            "Europe" | "europe" => Ok(Self::Europe),
            "Americas" | "americas" => Ok(Self::Americas),
            "Africa" | "africa" => Ok(Self::Africa),
            "Oceania" | "oceania" => Ok(Self::Oceania),
            other => Err(VisakitError::UnknownRegion(other.to_string())),
        }
    }
}
