//! # Error Types
//!
//! Shared error type for the visakit core vocabulary. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! The engine itself is total over its inputs and never returns these;
//! they surface only from parsing user-facing identifiers (regions, status
//! names, route keys) at the edges.

use thiserror::Error;

/// Top-level error type for visakit core operations.
#[derive(Error, Debug)]
pub enum VisakitError {
    /// A region name could not be parsed.
    #[error("unknown region: {0:?}")]
    UnknownRegion(String),

    /// A visa status name could not be parsed.
    #[error("unknown visa status: {0:?}")]
    UnknownStatus(String),

    /// A directional route key did not contain the `->` separator.
    #[error("malformed route key (expected \"ORIGIN->DEST\"): {0:?}")]
    MalformedRouteKey(String),
}
