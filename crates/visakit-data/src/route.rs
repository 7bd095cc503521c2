//! Directional route keys.
//!
//! The requirement table is keyed by the composite key
//! `"ORIGIN->DEST"`. Keys are directional: `"PK->AE"` and `"AE->PK"`
//! are independent entries, and the absence of a key is a valid state
//! ("no data"), distinct from an explicit visa-free record.

use visakit_core::{CountryCode, VisakitError};

/// Separator between origin and destination in a route key.
///
/// Part of the dataset format; must never collide with a country code.
pub const ROUTE_SEPARATOR: &str = "->";

/// Build the directional route key for an (origin, destination) pair.
pub fn route_key(origin: &CountryCode, dest: &CountryCode) -> String {
    format!("{origin}{ROUTE_SEPARATOR}{dest}")
}

/// Split a route key back into its (origin, destination) pair.
///
/// Used for dataset diagnostics; lookups always go through
/// [`route_key`] instead.
pub fn split_route_key(key: &str) -> Result<(CountryCode, CountryCode), VisakitError> {
    match key.split_once(ROUTE_SEPARATOR) {
        Some((origin, dest)) if !origin.is_empty() && !dest.is_empty() => {
            Ok((CountryCode::from(origin), CountryCode::from(dest)))
        }
        _ => Err(VisakitError::MalformedRouteKey(key.to_string())),
    }
}
