//! # Visa Status Classification
//!
//! Maps a (possibly waiver-adjusted) requirement record, or its absence,
//! to exactly one [`VisaStatus`]. Total: every input shape produces a
//! category.
//!
//! Precedence is fixed and deliberate: a visa-free record is visa-free
//! whatever its `visa_on_arrival` flag or note text says. Absence of data
//! classifies as visa-required — the conservative reading of "unknown".

use visakit_core::{VisaRequirement, VisaStatus};

/// Classify a requirement record, or its absence.
pub fn classify(requirement: Option<&VisaRequirement>) -> VisaStatus {
    let Some(requirement) = requirement else {
        return VisaStatus::VisaRequired;
    };
    if !requirement.visa_required {
        return VisaStatus::VisaFree;
    }
    if requirement.visa_on_arrival {
        return VisaStatus::VisaOnArrival;
    }
    if is_evisa_text(requirement) {
        return VisaStatus::Evisa;
    }
    VisaStatus::VisaRequired
}

/// Textual e-visa heuristic over the free-text `cost` and `notes` fields.
///
/// The dataset has no structured e-visa flag; phrasing is inconsistent,
/// so this is a substring proxy with known false positives and negatives.
/// Matches `"e-visa"` or `"evisa"` in either field, and `"online"` in the
/// notes only, after lowercasing. Absent fields count as empty.
fn is_evisa_text(requirement: &VisaRequirement) -> bool {
    if !requirement.visa_required {
        return false;
    }
    let cost = requirement.cost.as_deref().unwrap_or("").to_lowercase();
    let notes = requirement.notes.as_deref().unwrap_or("").to_lowercase();
    cost.contains("e-visa")
        || cost.contains("evisa")
        || notes.contains("e-visa")
        || notes.contains("evisa")
        || notes.contains("online")
}
