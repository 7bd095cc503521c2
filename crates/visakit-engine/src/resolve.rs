//! Shared lookup → waiver → classification pipeline.
//!
//! The aggregator, the filter, and the CLI all resolve a route the same
//! way: fetch the base record, adjust it for held documents when present,
//! then classify the result or its absence.

use visakit_core::{Country, TravelDocuments, VisaRequirement, VisaStatus};
use visakit_data::VisaDataset;

use crate::classify::classify;
use crate::waivers::apply_waivers;

/// The waiver-adjusted requirement for a route, or `None` when the
/// dataset has no entry for it.
pub fn resolve_requirement(
    origin: &Country,
    destination: &Country,
    dataset: &VisaDataset,
    documents: &TravelDocuments,
) -> Option<VisaRequirement> {
    dataset
        .requirement(&origin.code, &destination.code)
        .map(|base| apply_waivers(base, &origin.code, destination, documents))
}

/// The status of a destination relative to an origin, with absence
/// classified conservatively as visa-required.
pub fn resolve_status(
    origin: &Country,
    destination: &Country,
    dataset: &VisaDataset,
    documents: &TravelDocuments,
) -> VisaStatus {
    classify(resolve_requirement(origin, destination, dataset, documents).as_ref())
}
