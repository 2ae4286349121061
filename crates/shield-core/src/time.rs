//! Wall-clock timestamps.
//!
//! The core never reads the system clock.  Callers pass `now` explicitly,
//! which keeps the escalation window and expiry sweep deterministic under
//! test.

use std::fmt;

/// Seconds since the Unix epoch.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp(pub i64);

impl Timestamp {
    pub const EPOCH: Timestamp = Timestamp(0);

    #[inline]
    pub const fn from_unix_secs(secs: i64) -> Self {
        Timestamp(secs)
    }

    #[inline]
    pub fn unix_secs(self) -> i64 {
        self.0
    }

    /// The instant `hours` before `self`.
    #[inline]
    pub fn minus_hours(self, hours: u32) -> Timestamp {
        Timestamp(self.0 - hours as i64 * 3_600)
    }

    /// The instant `hours` after `self`.
    #[inline]
    pub fn plus_hours(self, hours: u32) -> Timestamp {
        Timestamp(self.0 + hours as i64 * 3_600)
    }

    /// Whole seconds elapsed from `earlier` to `self` (negative if `earlier`
    /// is in the future).
    #[inline]
    pub fn secs_since(self, earlier: Timestamp) -> i64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.0)
    }
}
