//! # Visa Status Taxonomy
//!
//! The closed, derived classification of a destination relative to an
//! origin. A status is never stored — it is always computed from a
//! [`VisaRequirement`](crate::VisaRequirement) or its absence.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::VisakitError;

/// The four mutually exclusive visa status categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisaStatus {
    /// No visa needed for entry.
    VisaFree,
    /// Authorization issued at the port of entry.
    VisaOnArrival,
    /// Online-issued authorization, inferred from free-text description.
    Evisa,
    /// A visa must be obtained in advance (also the conservative default
    /// when no data exists for the route).
    VisaRequired,
}

/// Total number of status categories.
pub const VISA_STATUS_COUNT: usize = 4;

impl VisaStatus {
    /// Returns all status categories in canonical order.
    pub fn all() -> &'static [VisaStatus] {
        &[
            Self::VisaFree,
            Self::VisaOnArrival,
            Self::Evisa,
            Self::VisaRequired,
        ]
    }

    /// Returns the snake_case string identifier for this status.
    ///
    /// This must match the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VisaFree => "visa_free",
            Self::VisaOnArrival => "visa_on_arrival",
            Self::Evisa => "evisa",
            Self::VisaRequired => "visa_required",
        }
    }

    /// Human-readable label for CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VisaFree => "Visa-free",
            Self::VisaOnArrival => "Visa on arrival",
            Self::Evisa => "E-visa",
            Self::VisaRequired => "Visa required",
        }
    }
}

impl std::fmt::Display for VisaStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VisaStatus {
    type Err = VisakitError;

    /// Parse a status from its snake_case identifier.
    ///
    /// Accepts the same identifiers produced by [`VisaStatus::as_str()`],
    /// plus kebab-case aliases for the CLI `--status` flag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visa_free" | "visa-free" => Ok(Self::VisaFree),
            "visa_on_arrival" | "visa-on-arrival" => Ok(Self::VisaOnArrival),
            "evisa" | "e-visa" => Ok(Self::Evisa),
            "visa_required" | "visa-required" => Ok(Self::VisaRequired),
            other => Err(VisakitError::UnknownStatus(other.to_string())),
        }
    }
}
