//! Tunable constants, passed into each component at construction.
//!
//! Typically loaded from a JSON file by the application crate (with the
//! `serde` feature) and handed to the services; nothing in the workspace
//! reads configuration from globals.

use std::time::Duration;

use crate::{BoundingBox, ShieldError, ShieldResult};

// ── RoutingConfig ─────────────────────────────────────────────────────────────

/// Proximity-graph construction and enrichment settings.
///
/// The defaults keep the relative weighting of distance, congestion, and
/// blockage that the planar-degree formulation used (10 per degree, 5 per
/// congestion level, +100 when blocked) after converting degrees to
/// great-circle kilometres.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoutingConfig {
    /// Edges exist only between points strictly closer than this.
    pub proximity_radius_km:   f64,
    /// Edge cost per kilometre of straight-line distance.
    pub distance_weight_per_km: f64,
    /// Edge cost per congestion level of the destination node.
    pub congestion_weight:     f64,
    /// Flat cost added when the destination node is blocked.
    pub block_penalty:         f64,
    /// Upper bound on a road-geometry lookup.
    pub geometry_timeout:      Duration,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            proximity_radius_km:    222.0,
            distance_weight_per_km: 0.09,
            congestion_weight:      5.0,
            block_penalty:          100.0,
            geometry_timeout:       Duration::from_secs(10),
        }
    }
}

impl RoutingConfig {
    /// All weights must be finite and non-negative, or Dijkstra's
    /// optimality guarantee is void.
    pub fn validate(&self) -> ShieldResult<()> {
        let fields = [
            ("proximity_radius_km", self.proximity_radius_km),
            ("distance_weight_per_km", self.distance_weight_per_km),
            ("congestion_weight", self.congestion_weight),
            ("block_penalty", self.block_penalty),
        ];
        for (name, v) in fields {
            if !v.is_finite() || v < 0.0 {
                return Err(ShieldError::Config(format!("{name} must be finite and >= 0, got {v}")));
            }
        }
        Ok(())
    }
}

// ── EvacuationConfig ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvacuationConfig {
    /// Floor of the exclusion radius; severity / 2 takes over above it.
    pub min_exclusion_km: f64,
    /// Linear ETA factor.  1.5 min/km ≈ 40 km/h average.
    pub minutes_per_km:   f64,
    /// Shelters outside this box are never candidates.  `None` = anywhere.
    pub region:           Option<BoundingBox>,
}

impl Default for EvacuationConfig {
    fn default() -> Self {
        Self { min_exclusion_km: 2.0, minutes_per_km: 1.5, region: None }
    }
}

// ── EscalationConfig ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EscalationConfig {
    /// Severity at or above which a hazard is promoted on its own.
    pub critical_severity:    u8,
    /// Trailing window for cluster detection.
    pub cluster_window_hours: u32,
    pub cluster_radius_km:    f64,
    /// Reports (including the new one) needed to trigger a cluster.
    pub cluster_threshold:    usize,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            critical_severity:    8,
            cluster_window_hours: 6,
            cluster_radius_km:    3.0,
            cluster_threshold:    5,
        }
    }
}

// ── ExpiryConfig ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExpiryConfig {
    /// Age after which `Active` and `Resolved` hazards are archived.
    pub active_ttl_hours:   u32,
    /// Age after which `Critical` hazards are archived.
    pub critical_ttl_hours: u32,
}

impl Default for ExpiryConfig {
    fn default() -> Self {
        Self { active_ttl_hours: 24, critical_ttl_hours: 48 }
    }
}

// ── ShieldConfig ──────────────────────────────────────────────────────────────

/// Top-level configuration bundle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShieldConfig {
    pub routing:    RoutingConfig,
    pub evacuation: EvacuationConfig,
    pub escalation: EscalationConfig,
    pub expiry:     ExpiryConfig,
}
