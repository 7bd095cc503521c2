//! # Existing-Visa Waiver Rules
//!
//! Reciprocal-agreement rules: holding a US, UK, or Schengen visa grants
//! simplified or waived entry to certain third countries for certain
//! passport holders. Encoded as one flat, ordered rule table evaluated
//! top to bottom; the first matching rule wins and everything after it is
//! skipped, falling through to the unchanged base record when nothing
//! matches.
//!
//! Rule order is load-bearing. Destination sets within a document branch
//! are disjoint today, but the table is deliberately not cross-validated:
//! should a country ever appear in two sets, the earlier rule decides.
//!
//! The Pakistan-specific rules are far more detailed than the generic
//! tail — the rule set grew destination by destination as coverage was
//! researched, and makes no claim to being a general reciprocity model.

use visakit_core::{Country, CountryCode, TravelDocuments, VisaRequirement};

/// The held travel document a waiver rule keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeldDocument {
    /// Valid multi-entry US visa.
    UsVisa,
    /// Valid multi-entry UK visa.
    UkVisa,
    /// Valid multi-entry Schengen visa.
    SchengenVisa,
    /// UAE residency permit. No current rule keys on it.
    UaeResidency,
}

impl HeldDocument {
    /// Whether the traveler asserts holding this document.
    pub fn is_asserted(&self, documents: &TravelDocuments) -> bool {
        match self {
            Self::UsVisa => documents.us_visa,
            Self::UkVisa => documents.uk_visa,
            Self::SchengenVisa => documents.schengen_visa,
            Self::UaeResidency => documents.uae_residency,
        }
    }
}

/// How a rule rewrites the notes of the base record.
#[derive(Debug, Clone, Copy)]
pub enum NoteEdit {
    /// Leave the base notes untouched.
    Keep,
    /// Append a sentence to the base notes (absent notes count as empty).
    Append(&'static str),
    /// Replace the base notes entirely.
    Replace(&'static str),
}

impl NoteEdit {
    fn apply(&self, base: Option<&str>) -> Option<String> {
        match self {
            Self::Keep => base.map(str::to_string),
            Self::Append(text) => Some(match base {
                Some(existing) => format!("{existing} {text}"),
                None => (*text).to_string(),
            }),
            Self::Replace(text) => Some((*text).to_string()),
        }
    }
}

/// The adjustment a matching rule applies to the base record.
///
/// Always clears `visa_on_arrival`: a waiver either removes the visa
/// requirement outright or routes it through an advance e-visa, never
/// through the arrival counter.
#[derive(Debug, Clone, Copy)]
pub struct WaiverGrant {
    /// New value for `visa_required`.
    pub visa_required: bool,
    /// New permitted stay; `None` keeps the base duration.
    pub duration: Option<&'static str>,
    /// How to rewrite the notes.
    pub note: NoteEdit,
}

impl WaiverGrant {
    /// Derive a new record from `base`. Never mutates `base`.
    fn apply(&self, base: &VisaRequirement) -> VisaRequirement {
        let mut derived = base.clone();
        derived.visa_required = self.visa_required;
        derived.visa_on_arrival = false;
        if let Some(duration) = self.duration {
            derived.duration = Some(duration.to_string());
        }
        derived.notes = self.note.apply(base.notes.as_deref());
        derived
    }
}

/// One entry in the ordered waiver table.
#[derive(Debug, Clone, Copy)]
pub struct WaiverRule {
    /// Short identifier for logging.
    pub name: &'static str,
    /// Origin the rule is restricted to; `None` applies to any origin.
    pub origin: Option<&'static str>,
    /// The held document that triggers the rule.
    pub document: HeldDocument,
    /// Destination codes the rule covers.
    pub destinations: &'static [&'static str],
    /// The adjustment applied on a match.
    pub grant: WaiverGrant,
}

impl WaiverRule {
    /// Whether this rule matches the given lookup.
    pub fn matches(
        &self,
        origin: &str,
        destination: &str,
        documents: &TravelDocuments,
    ) -> bool {
        if let Some(required_origin) = self.origin {
            if origin != required_origin {
                return false;
            }
        }
        self.document.is_asserted(documents) && self.destinations.contains(&destination)
    }
}

/// Countries that become visa-free for Pakistani passport holders with a
/// valid multi-entry US visa.
const PK_US_VISA_FREE: &[&str] = &[
    "AL", "BA", "BZ", "CO", "CR", "DO", "EC", "GE", "JM", "XK", "MX", "ME", "MK", "PA", "PE",
    "PH", "RS",
];

/// Countries offering simplified e-visa processing to Pakistani passport
/// holders with a valid US visa.
const PK_US_EVISA: &[&str] = &[
    "AZ", "BH", "JO", "KG", "MA", "OM", "QA", "SA", "TW", "TJ", "TR",
];

const PK_UK_VISA_FREE: &[&str] = &[
    "AL", "BA", "DO", "GE", "JM", "XK", "MX", "ME", "MK", "PA", "PE", "PH", "RS",
];

const PK_UK_EVISA: &[&str] = &[
    "AG", "AZ", "BH", "KG", "MA", "OM", "QA", "SA", "TW", "TJ", "TR",
];

/// The 26 Schengen member states.
const SCHENGEN_MEMBERS: &[&str] = &[
    "FR", "DE", "IT", "ES", "NL", "BE", "AT", "SE", "NO", "DK", "FI", "PL", "GR", "PT", "CH",
    "IS", "LI", "LU", "MT", "CZ", "EE", "HU", "LV", "LT", "SK", "SI",
];

/// Non-Schengen countries accessible with a valid Schengen visa.
const SCHENGEN_ADJACENT: &[&str] = &["CO", "CR", "EC"];

/// Shorter Schengen list used by the generic (any-origin) rule.
const SCHENGEN_GENERIC: &[&str] = &[
    "FR", "DE", "IT", "ES", "NL", "BE", "AT", "SE", "NO", "DK", "FI", "PL", "GR", "PT", "CH",
];

/// The ordered waiver table. First match wins; order is load-bearing.
pub const WAIVER_RULES: &[WaiverRule] = &[
    WaiverRule {
        name: "pk-us-visa-free",
        origin: Some("PK"),
        document: HeldDocument::UsVisa,
        destinations: PK_US_VISA_FREE,
        grant: WaiverGrant {
            visa_required: false,
            duration: Some("30-90 days"),
            note: NoteEdit::Append("Visa-free with valid US visa (multi-entry)."),
        },
    },
    WaiverRule {
        name: "pk-us-simplified-evisa",
        origin: Some("PK"),
        document: HeldDocument::UsVisa,
        destinations: PK_US_EVISA,
        grant: WaiverGrant {
            visa_required: true,
            duration: None,
            note: NoteEdit::Append("Simplified e-visa processing available with valid US visa."),
        },
    },
    WaiverRule {
        name: "pk-us-canada",
        origin: Some("PK"),
        document: HeldDocument::UsVisa,
        destinations: &["CA"],
        grant: WaiverGrant {
            visa_required: false,
            duration: Some("6 months"),
            note: NoteEdit::Replace(
                "Pakistani citizens with US green card can visit Canada visa-free for up to 6 months.",
            ),
        },
    },
    WaiverRule {
        name: "pk-uk-visa-free",
        origin: Some("PK"),
        document: HeldDocument::UkVisa,
        destinations: PK_UK_VISA_FREE,
        grant: WaiverGrant {
            visa_required: false,
            duration: Some("30-90 days"),
            note: NoteEdit::Append("Visa-free with valid UK visa (multi-entry)."),
        },
    },
    WaiverRule {
        name: "pk-uk-simplified-evisa",
        origin: Some("PK"),
        document: HeldDocument::UkVisa,
        destinations: PK_UK_EVISA,
        grant: WaiverGrant {
            visa_required: true,
            duration: None,
            note: NoteEdit::Append("Simplified e-visa processing available with valid UK visa."),
        },
    },
    WaiverRule {
        name: "pk-schengen-members",
        origin: Some("PK"),
        document: HeldDocument::SchengenVisa,
        destinations: SCHENGEN_MEMBERS,
        grant: WaiverGrant {
            visa_required: false,
            duration: Some("90 days within 180 days"),
            note: NoteEdit::Replace(
                "Pakistani citizens with valid Schengen visa can visit this country visa-free for up to 90 days within any 180-day period.",
            ),
        },
    },
    WaiverRule {
        name: "pk-schengen-adjacent",
        origin: Some("PK"),
        document: HeldDocument::SchengenVisa,
        destinations: SCHENGEN_ADJACENT,
        grant: WaiverGrant {
            visa_required: false,
            duration: Some("30-90 days"),
            note: NoteEdit::Append("Visa-free with valid Schengen visa (multi-entry)."),
        },
    },
    WaiverRule {
        name: "pk-schengen-jordan",
        origin: Some("PK"),
        document: HeldDocument::SchengenVisa,
        destinations: &["JO"],
        grant: WaiverGrant {
            visa_required: true,
            duration: None,
            note: NoteEdit::Append(
                "Simplified e-visa or visa-on-arrival processing available with valid Schengen visa.",
            ),
        },
    },
    WaiverRule {
        name: "generic-us-neighbors",
        origin: None,
        document: HeldDocument::UsVisa,
        destinations: &["MX", "CA"],
        grant: WaiverGrant {
            visa_required: false,
            duration: None,
            note: NoteEdit::Keep,
        },
    },
    WaiverRule {
        name: "generic-schengen",
        origin: None,
        document: HeldDocument::SchengenVisa,
        destinations: SCHENGEN_GENERIC,
        grant: WaiverGrant {
            visa_required: false,
            duration: None,
            note: NoteEdit::Keep,
        },
    },
];

/// Adjust `base` for the travel documents the traveler already holds.
///
/// Pure: `base` is never mutated. Walks [`WAIVER_RULES`] in order and
/// applies the first matching rule's grant; returns an unchanged clone of
/// `base` when no rule matches.
pub fn apply_waivers(
    base: &VisaRequirement,
    origin: &CountryCode,
    destination: &Country,
    documents: &TravelDocuments,
) -> VisaRequirement {
    for rule in WAIVER_RULES {
        if rule.matches(origin.as_str(), destination.code.as_str(), documents) {
            tracing::debug!(
                rule = rule.name,
                origin = %origin,
                destination = %destination.code,
                "waiver rule matched"
            );
            return rule.grant.apply(base);
        }
    }
    base.clone()
}
