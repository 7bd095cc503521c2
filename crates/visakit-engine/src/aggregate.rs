//! # Per-Origin Statistics
//!
//! Tallies every destination into one of the four status counters for a
//! given origin. Derived data, recomputed on any change to the origin or
//! the asserted documents.

use visakit_core::{Country, TravelDocuments, VisaStatistics};
use visakit_data::VisaDataset;

use crate::resolve::resolve_status;

/// Tally all destinations for `origin` by visa status.
///
/// Destinations equal to the origin are skipped; routes with no data
/// count toward `visa_required` ("unknown, assume required"). An unset
/// origin yields all-zero statistics.
pub fn aggregate(
    origin: Option<&Country>,
    countries: &[&Country],
    dataset: &VisaDataset,
    documents: &TravelDocuments,
) -> VisaStatistics {
    let mut stats = VisaStatistics::default();
    let Some(origin) = origin else {
        return stats;
    };

    for destination in countries {
        if destination.code == origin.code {
            continue;
        }
        stats.record(resolve_status(origin, destination, dataset, documents));
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use visakit_core::CountryCode;

    fn dataset() -> VisaDataset {
        VisaDataset::bundled().unwrap()
    }

    #[test]
    fn unset_origin_yields_zero_statistics() {
        let dataset = dataset();
        let countries = dataset.countries_by_name();
        let stats = aggregate(None, &countries, &dataset, &TravelDocuments::default());
        assert_eq!(stats, VisaStatistics::default());
    }

    #[test]
    fn counts_sum_to_destinations_excluding_origin() {
        let dataset = dataset();
        let countries = dataset.countries_by_name();
        let origin = dataset.country(&CountryCode::from("PK")).unwrap();
        let stats = aggregate(Some(origin), &countries, &dataset, &TravelDocuments::default());
        assert_eq!(stats.total(), countries.len() - 1);
    }

    #[test]
    fn missing_routes_count_as_visa_required() {
        // Japan has only four explicit rows in the bundled data; every
        // other destination, North Korea included, lands in visa_required.
        let dataset = dataset();
        let countries = dataset.countries_by_name();
        let origin = dataset.country(&CountryCode::from("JP")).unwrap();
        let stats = aggregate(Some(origin), &countries, &dataset, &TravelDocuments::default());
        assert_eq!(stats.total(), countries.len() - 1);
        assert!(stats.visa_required >= countries.len() - 5);
    }

    #[test]
    fn us_visa_shifts_pk_counts_toward_visa_free() {
        let dataset = dataset();
        let countries = dataset.countries_by_name();
        let origin = dataset.country(&CountryCode::from("PK")).unwrap();

        let without = aggregate(Some(origin), &countries, &dataset, &TravelDocuments::default());
        let with = aggregate(
            Some(origin),
            &countries,
            &dataset,
            &TravelDocuments {
                us_visa: true,
                ..Default::default()
            },
        );

        assert!(with.visa_free > without.visa_free);
        assert_eq!(with.total(), without.total());
    }

    #[test]
    fn schengen_visa_frees_all_member_states_for_pk() {
        let dataset = dataset();
        let countries = dataset.countries_by_name();
        let origin = dataset.country(&CountryCode::from("PK")).unwrap();

        let without = aggregate(Some(origin), &countries, &dataset, &TravelDocuments::default());
        let with = aggregate(
            Some(origin),
            &countries,
            &dataset,
            &TravelDocuments {
                schengen_visa: true,
                ..Default::default()
            },
        );

        // 26 member states plus CO/CR/EC become visa-free.
        assert_eq!(with.visa_free, without.visa_free + 29);
    }
}
