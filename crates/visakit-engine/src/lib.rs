//! # visakit-engine — Visa Status Resolution
//!
//! The decision core: pure, synchronous, re-entrant functions over the
//! read-only dataset. Four operations make up the whole public surface:
//!
//! - [`apply_waivers`] — adjust a base requirement for travel documents
//!   the traveler already holds (ordered rule table, first match wins).
//! - [`classify`] — map a requirement, or its absence, to one of the four
//!   [`VisaStatus`](visakit_core::VisaStatus) categories.
//! - [`aggregate`] — tally destinations per status for one origin.
//! - [`filter_countries`] — stable conjunction filter over the registry.
//!
//! Nothing here mutates shared state, blocks, or performs I/O; every
//! operation is deterministic and may be invoked concurrently without
//! coordination. Derived records are recomputed per query — no caching.

pub mod aggregate;
pub mod classify;
pub mod filter;
pub mod resolve;
pub mod waivers;

pub use aggregate::aggregate;
pub use classify::classify;
pub use filter::{filter_countries, FilterQuery};
pub use resolve::{resolve_requirement, resolve_status};
pub use waivers::{apply_waivers, WaiverRule, WAIVER_RULES};
