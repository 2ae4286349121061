//! `shield-core` — foundational types for the `shield` disaster-response core.
//!
//! This crate is a dependency of every other `shield-*` crate.  It has no
//! `shield-*` dependencies and a single required external one (`thiserror`),
//! plus optional `serde`.
//!
//! # What lives here
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, haversine distance, `BoundingBox`                |
//! | [`ids`]      | `HazardId`, `ShelterId`, `AuthorityId`, `NodeIndex`          |
//! | [`time`]     | `Timestamp` (Unix seconds)                                   |
//! | [`record`]   | `Hazard`, `Shelter`, `TrafficPoint`, `Authority`, `EscalationRecord` |
//! | [`config`]   | `RoutingConfig`, `EvacuationConfig`, `EscalationConfig`, …   |
//! | [`error`]    | `ShieldError`, `ShieldResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod record;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{EscalationConfig, EvacuationConfig, ExpiryConfig, RoutingConfig, ShieldConfig};
pub use error::{ShieldError, ShieldResult};
pub use geo::{BoundingBox, GeoPoint};
pub use ids::{AuthorityId, HazardId, NodeIndex, ShelterId};
pub use record::{
    Authority, AuthorityKind, EscalationRecord, Hazard, HazardKind, HazardStatus, Shelter,
    TrafficPoint,
};
pub use time::Timestamp;
