//! # Country Reference Data
//!
//! Newtype for country codes plus the `Country` record itself. Countries
//! are immutable reference data: loaded once with the dataset at process
//! start and never mutated afterwards.
//!
//! The `CountryCode` newtype prevents identifier confusion — you cannot
//! pass a bare search string where a code is expected. Codes are NOT
//! validated at deserialization: a malformed code in the dataset simply
//! never matches a lookup (absence is meaningful, not an error).

use serde::{Deserialize, Serialize};

use crate::region::Region;

/// Two-letter country code identifying a country in the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountryCode(pub String);

impl CountryCode {
    /// Wrap a code string.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Access the inner code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CountryCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A country in the reference registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// Unique two-letter code.
    pub code: CountryCode,
    /// Human-readable display name.
    pub name: String,
    /// World region the country belongs to.
    pub region: Region,
}

impl Country {
    /// Case-insensitive substring match against name or code.
    ///
    /// An empty query matches every country. Substring, not prefix or
    /// fuzzy — `"ran"` matches both "France" and "Iran".
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q) || self.code.as_str().to_lowercase().contains(&q)
    }
}
