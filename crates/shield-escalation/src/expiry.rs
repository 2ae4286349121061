//! Archival sweep.

use tracing::debug;

use shield_core::{ExpiryConfig, Hazard, HazardId, HazardStatus, Timestamp};

/// Status changes the periodic sweep wants applied at `now`.
///
/// `Active` and `Resolved` hazards at least `active_ttl_hours` old and
/// `Critical` hazards at least `critical_ttl_hours` old become `Archived`.
/// Pure: the caller persists the returned changes.
pub fn expire(
    hazards: &[Hazard],
    now:     Timestamp,
    config:  &ExpiryConfig,
) -> Vec<(HazardId, HazardStatus)> {
    let changes: Vec<(HazardId, HazardStatus)> = hazards
        .iter()
        .filter(|h| {
            let ttl = match h.status {
                HazardStatus::Active | HazardStatus::Resolved => config.active_ttl_hours,
                HazardStatus::Critical => config.critical_ttl_hours,
                HazardStatus::Archived => return false,
            };
            h.created_at <= now.minus_hours(ttl)
        })
        .map(|h| (h.id, HazardStatus::Archived))
        .collect();
    debug!(scanned = hazards.len(), archived = changes.len(), "expiry sweep");
    changes
}
