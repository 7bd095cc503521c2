//! # Held Travel Documents
//!
//! The traveler's asserted existing visas and residencies. Ephemeral user
//! input: scoped to a single query, never persisted.

use serde::{Deserialize, Serialize};

/// Travel documents the traveler asserts they already hold.
///
/// These assertions feed the waiver rule table; nothing verifies them.
/// `uae_residency` is accepted for completeness but no current waiver
/// rule consumes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelDocuments {
    /// A valid multi-entry US visa.
    pub us_visa: bool,
    /// A valid multi-entry UK visa.
    pub uk_visa: bool,
    /// A valid multi-entry Schengen visa.
    pub schengen_visa: bool,
    /// UAE residency permit.
    pub uae_residency: bool,
}

impl TravelDocuments {
    /// True when no document is asserted at all.
    pub fn is_empty(&self) -> bool {
        !(self.us_visa || self.uk_visa || self.schengen_visa || self.uae_residency)
    }
}
