//! Normalized records supplied by the persistence and ingestion
//! collaborators.
//!
//! The core reads these and never mutates them in place.  The one exception
//! is a hazard's status, and even then the engine only *reports* the new
//! status; writing it back is the caller's job.

use std::fmt;
use std::str::FromStr;

use crate::{AuthorityId, GeoPoint, HazardId, ShelterId, ShieldError, ShieldResult, Timestamp};

/// Highest severity a report may carry.
pub const MAX_SEVERITY: u8 = 10;

/// Highest congestion level a traffic point may carry.
pub const MAX_CONGESTION: f64 = 10.0;

// ── HazardKind ────────────────────────────────────────────────────────────────

/// The type of a reported hazard.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HazardKind {
    Flood,
    Fire,
    Earthquake,
    Cyclone,
    Heatwave,
    Wildfire,
    Landslide,
}

impl HazardKind {
    pub const ALL: [HazardKind; 7] = [
        HazardKind::Flood,
        HazardKind::Fire,
        HazardKind::Earthquake,
        HazardKind::Cyclone,
        HazardKind::Heatwave,
        HazardKind::Wildfire,
        HazardKind::Landslide,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HazardKind::Flood => "flood",
            HazardKind::Fire => "fire",
            HazardKind::Earthquake => "earthquake",
            HazardKind::Cyclone => "cyclone",
            HazardKind::Heatwave => "heatwave",
            HazardKind::Wildfire => "wildfire",
            HazardKind::Landslide => "landslide",
        }
    }
}

impl fmt::Display for HazardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HazardKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        HazardKind::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown hazard kind {s:?}"))
    }
}

// ── HazardStatus ──────────────────────────────────────────────────────────────

/// Lifecycle status of a hazard.
///
/// ```text
/// Active ──► Critical ──► Archived
///    │                       ▲
///    └─────► Resolved ───────┘
/// ```
///
/// `Active → Archived` is also allowed: the expiry sweep archives stale
/// active reports directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HazardStatus {
    Active,
    Critical,
    Resolved,
    Archived,
}

impl HazardStatus {
    /// `true` if moving from `self` to `to` is a forward transition.
    /// Staying in the same status is not a transition.
    pub fn can_transition(self, to: HazardStatus) -> bool {
        use HazardStatus::*;
        matches!(
            (self, to),
            (Active, Critical)
                | (Active, Resolved)
                | (Active, Archived)
                | (Critical, Archived)
                | (Resolved, Archived)
        )
    }

    /// Counts toward live routing penalties and cluster detection.
    #[inline]
    pub fn is_live(self) -> bool {
        matches!(self, HazardStatus::Active | HazardStatus::Critical)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HazardStatus::Active => "active",
            HazardStatus::Critical => "critical",
            HazardStatus::Resolved => "resolved",
            HazardStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for HazardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HazardStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(HazardStatus::Active),
            "critical" => Ok(HazardStatus::Critical),
            "resolved" => Ok(HazardStatus::Resolved),
            "archived" => Ok(HazardStatus::Archived),
            other => Err(format!("unknown hazard status {other:?}")),
        }
    }
}

// ── Hazard ────────────────────────────────────────────────────────────────────

/// A reported disaster event.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hazard {
    pub id:         HazardId,
    pub kind:       HazardKind,
    pub location:   GeoPoint,
    /// 0 (negligible) ..= 10 (catastrophic).
    pub severity:   u8,
    pub status:     HazardStatus,
    pub created_at: Timestamp,
}

impl Hazard {
    /// A freshly reported `Active` hazard.
    pub fn new(
        id:         HazardId,
        kind:       HazardKind,
        location:   GeoPoint,
        severity:   u8,
        created_at: Timestamp,
    ) -> Self {
        Self { id, kind, location, severity, status: HazardStatus::Active, created_at }
    }

    /// Check coordinates and severity range.
    pub fn validate(&self) -> ShieldResult<()> {
        self.location.validate()?;
        if self.severity > MAX_SEVERITY {
            return Err(ShieldError::InvalidSeverity(self.severity));
        }
        Ok(())
    }
}

// ── Shelter ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shelter {
    pub id:        ShelterId,
    pub name:      String,
    pub location:  GeoPoint,
    pub capacity:  u32,
    pub occupancy: u32,
    pub contact:   String,
    /// Inactive shelters are never routing candidates.
    pub active:    bool,
}

impl Shelter {
    /// An active shelter with no contact details; handy for tests and
    /// synthetic scenarios.
    pub fn at(id: ShelterId, name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            capacity: 0,
            occupancy: 0,
            contact: String::new(),
            active: true,
        }
    }
}

// ── TrafficPoint ──────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficPoint {
    pub location:   GeoPoint,
    /// 0 (free flow) ..= 10 (standstill).
    pub congestion: f64,
    pub blocked:    bool,
}

impl TrafficPoint {
    pub fn new(location: GeoPoint, congestion: f64, blocked: bool) -> Self {
        Self { location, congestion, blocked }
    }

    pub fn validate(&self) -> ShieldResult<()> {
        self.location.validate()?;
        if !(0.0..=MAX_CONGESTION).contains(&self.congestion) {
            return Err(ShieldError::InvalidCongestion(self.congestion));
        }
        Ok(())
    }
}

// ── Authority ─────────────────────────────────────────────────────────────────

/// Responder category, used by severity-tier routing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AuthorityKind {
    /// National disaster response force.
    Ndrf,
    /// State disaster response force.
    Sdrf,
    Police,
    Fire,
    Medical,
}

impl AuthorityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AuthorityKind::Ndrf => "ndrf",
            AuthorityKind::Sdrf => "sdrf",
            AuthorityKind::Police => "police",
            AuthorityKind::Fire => "fire",
            AuthorityKind::Medical => "medical",
        }
    }
}

impl FromStr for AuthorityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ndrf" => Ok(AuthorityKind::Ndrf),
            "sdrf" => Ok(AuthorityKind::Sdrf),
            "police" => Ok(AuthorityKind::Police),
            "fire" => Ok(AuthorityKind::Fire),
            "medical" => Ok(AuthorityKind::Medical),
            other => Err(format!("unknown authority kind {other:?}")),
        }
    }
}

impl fmt::Display for AuthorityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Authority {
    pub id:       AuthorityId,
    pub name:     String,
    pub kind:     AuthorityKind,
    pub location: GeoPoint,
    pub phone:    String,
    pub email:    String,
}

// ── EscalationRecord ──────────────────────────────────────────────────────────

/// Proof that a hazard was escalated.  At most one exists per hazard.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EscalationRecord {
    pub hazard:         HazardId,
    pub authority_name: String,
    /// `false` until the notifier confirms delivery.
    pub notified:       bool,
    pub timestamp:      Timestamp,
}
