//! End-to-end scenarios over the bundled dataset: lookup, waiver
//! adjustment, classification, aggregation, and filtering working
//! together the way the presentation layer drives them.

use visakit_core::{CountryCode, TravelDocuments, VisaStatus};
use visakit_data::VisaDataset;
use visakit_engine::{
    aggregate, classify, filter_countries, resolve_requirement, resolve_status, FilterQuery,
};

fn dataset() -> VisaDataset {
    VisaDataset::bundled().expect("bundled dataset must parse")
}

fn us_visa() -> TravelDocuments {
    TravelDocuments {
        us_visa: true,
        ..Default::default()
    }
}

#[test]
fn pk_to_albania_with_us_visa_becomes_visa_free() {
    let dataset = dataset();
    let origin = dataset.country(&CountryCode::from("PK")).unwrap();
    let albania = dataset.country(&CountryCode::from("AL")).unwrap();

    let base = dataset.requirement(&origin.code, &albania.code).unwrap();
    assert!(base.visa_required);
    assert!(!base.visa_on_arrival);

    let adjusted = resolve_requirement(origin, albania, &dataset, &us_visa()).unwrap();
    assert!(!adjusted.visa_required);
    assert!(!adjusted.visa_on_arrival);
    assert_eq!(adjusted.duration.as_deref(), Some("30-90 days"));
    assert_eq!(classify(Some(&adjusted)), VisaStatus::VisaFree);
}

#[test]
fn pk_to_france_with_schengen_visa_becomes_visa_free() {
    let dataset = dataset();
    let origin = dataset.country(&CountryCode::from("PK")).unwrap();
    let france = dataset.country(&CountryCode::from("FR")).unwrap();
    let documents = TravelDocuments {
        schengen_visa: true,
        ..Default::default()
    };

    let adjusted = resolve_requirement(origin, france, &dataset, &documents).unwrap();
    assert!(!adjusted.visa_required);
    assert_eq!(adjusted.duration.as_deref(), Some("90 days within 180 days"));
    assert_eq!(classify(Some(&adjusted)), VisaStatus::VisaFree);
}

#[test]
fn jp_to_kp_has_no_data_and_counts_as_visa_required() {
    let dataset = dataset();
    let japan = dataset.country(&CountryCode::from("JP")).unwrap();
    let north_korea = dataset.country(&CountryCode::from("KP")).unwrap();

    assert!(resolve_requirement(japan, north_korea, &dataset, &TravelDocuments::default()).is_none());
    assert_eq!(
        resolve_status(japan, north_korea, &dataset, &TravelDocuments::default()),
        VisaStatus::VisaRequired
    );

    // And the aggregate counts North Korea under visa_required: removing
    // it from the destination list drops exactly that counter by one.
    let countries = dataset.countries_by_name();
    let full = aggregate(Some(japan), &countries, &dataset, &TravelDocuments::default());
    let without_kp: Vec<_> = countries
        .iter()
        .copied()
        .filter(|c| c.code.as_str() != "KP")
        .collect();
    let reduced = aggregate(Some(japan), &without_kp, &dataset, &TravelDocuments::default());
    assert_eq!(full.visa_required, reduced.visa_required + 1);
    assert_eq!(full.visa_free, reduced.visa_free);
    assert_eq!(full.evisa, reduced.evisa);
}

#[test]
fn evisa_portal_note_classifies_as_evisa() {
    let dataset = dataset();
    let origin = dataset.country(&CountryCode::from("PK")).unwrap();
    let kenya = dataset.country(&CountryCode::from("KE")).unwrap();

    let base = dataset.requirement(&origin.code, &kenya.code).unwrap();
    assert!(base.visa_required);
    assert!(!base.visa_on_arrival);
    assert_eq!(base.notes.as_deref(), Some("Apply online via e-visa portal."));
    assert_eq!(classify(Some(base)), VisaStatus::Evisa);
}

#[test]
fn status_filter_without_origin_reduces_to_query_and_region() {
    let dataset = dataset();
    let countries = dataset.countries_by_name();
    let with_status = filter_countries(
        &countries,
        &dataset,
        &FilterQuery {
            status: Some(VisaStatus::Evisa),
            query: "an",
            ..Default::default()
        },
    );
    let without_status = filter_countries(
        &countries,
        &dataset,
        &FilterQuery {
            query: "an",
            ..Default::default()
        },
    );
    assert_eq!(with_status, without_status);
}

#[test]
fn statistics_and_filter_agree_per_status() {
    // The aggregator's counters and the filter's per-status result sizes
    // are two views of the same classification; they must agree.
    let dataset = dataset();
    let countries = dataset.countries_by_name();
    let origin = dataset.country(&CountryCode::from("PK")).unwrap();
    let documents = us_visa();

    let stats = aggregate(Some(origin), &countries, &dataset, &documents);
    for status in VisaStatus::all() {
        let filtered = filter_countries(
            &countries,
            &dataset,
            &FilterQuery {
                origin: Some(origin),
                status: Some(*status),
                documents,
                ..Default::default()
            },
        );
        assert_eq!(
            filtered.len(),
            stats.count(*status),
            "filter and statistics disagree for {status}"
        );
    }
}
