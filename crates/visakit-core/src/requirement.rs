//! # Bilateral Visa Requirement Records
//!
//! [`VisaRequirement`] is the rule for one ordered (origin, destination)
//! country pair. Records are immutable once loaded; waiver rules never
//! mutate a base record, they produce a new derived record.

use serde::{Deserialize, Serialize};

/// The visa rule for one ordered (origin, destination) pair.
///
/// `visa_on_arrival = true` conventionally implies `visa_required = true`,
/// but the combination is deliberately unchecked: classification gives
/// `visa_required = false` absolute precedence, so the on-arrival flag is
/// irrelevant for a visa-free record whatever its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisaRequirement {
    /// Whether a visa must be obtained before or upon travel.
    pub visa_required: bool,
    /// Whether the visa is issued at the port of entry.
    pub visa_on_arrival: bool,
    /// Permitted stay, free text (e.g. `"90 days"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Typical processing time, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processing_time: Option<String>,
    /// Application cost, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
    /// Additional notes, free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Ordered list of application requirements.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,
}

impl VisaRequirement {
    /// A plain visa-free record with no further detail.
    pub fn visa_free() -> Self {
        Self {
            visa_required: false,
            visa_on_arrival: false,
            duration: None,
            processing_time: None,
            cost: None,
            notes: None,
            requirements: None,
        }
    }

    /// A plain visa-required record with no further detail.
    pub fn visa_required() -> Self {
        Self {
            visa_required: true,
            ..Self::visa_free()
        }
    }
}
