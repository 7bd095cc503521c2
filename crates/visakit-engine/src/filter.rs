//! # Destination Filter
//!
//! Stable, order-preserving conjunction filter over the country registry.
//! Each predicate narrows the list; none re-sorts it.

use visakit_core::{Country, Region, TravelDocuments, VisaStatus};
use visakit_data::VisaDataset;

use crate::resolve::resolve_status;

/// The filter criteria supplied by the caller.
///
/// All criteria default to neutral: no origin, empty query, no region or
/// status restriction, no documents asserted.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery<'a> {
    /// The traveler's origin; excluded from results and required for the
    /// status predicate.
    pub origin: Option<&'a Country>,
    /// Case-insensitive substring matched against name or code.
    pub query: &'a str,
    /// Restrict to one region; `None` means all.
    pub region: Option<Region>,
    /// Restrict to one status; `None` means all. Skipped entirely when
    /// `origin` is unset — a status is undefined without an origin.
    pub status: Option<VisaStatus>,
    /// Documents the traveler asserts holding, fed to the waiver rules.
    pub documents: TravelDocuments,
}

/// Filter `countries`, preserving their order.
///
/// Predicates are conjunctive: a country survives only if it is not the
/// origin, matches the query, matches the region restriction, and (when
/// both an origin and a status restriction are set) resolves to the
/// requested status.
pub fn filter_countries<'a>(
    countries: &[&'a Country],
    dataset: &VisaDataset,
    query: &FilterQuery<'_>,
) -> Vec<&'a Country> {
    countries
        .iter()
        .copied()
        .filter(|country| {
            if let Some(origin) = query.origin {
                if country.code == origin.code {
                    return false;
                }
            }

            if !country.matches_query(query.query) {
                return false;
            }

            if let Some(region) = query.region {
                if country.region != region {
                    return false;
                }
            }

            if let (Some(status), Some(origin)) = (query.status, query.origin) {
                if resolve_status(origin, country, dataset, &query.documents) != status {
                    return false;
                }
            }

            true
        })
        .collect()
}
