//! Core error type.
//!
//! Sub-crates may define their own error enums and wrap `ShieldError` as one
//! variant (see `shield-feed`), or return it directly when validation is the
//! only failure mode (see `shield-spatial`).
//!
//! "No route" and "no candidate" are not errors; they are ordinary outcomes
//! reported through result enums in the crates that produce them.

use thiserror::Error;

/// Input rejected at the boundary, before any graph is built.
#[derive(Debug, Error, PartialEq)]
pub enum ShieldError {
    #[error("invalid coordinate ({lat}, {lon})")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("severity {0} outside 0..=10")]
    InvalidSeverity(u8),

    #[error("congestion {0} outside 0..=10")]
    InvalidCongestion(f64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `shield-*` crates.
pub type ShieldResult<T> = Result<T, ShieldError>;
