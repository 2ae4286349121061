//! Responder-side plan for a single hazard: which shelter to send people
//! to, and which authority is closest.
//!
//! Shelters are scored from the hazard's point of view rather than a
//! user's:
//!
//! ```text
//! score = d(hazard, shelter)
//!       + 5                      if d(hazard, shelter) < 1 km
//!       + Σ congestion (+20 if blocked)   for traffic points < 2 km from the shelter
//! ```
//!
//! Lowest score wins; on equal scores the earlier shelter in input order
//! is kept.

use tracing::debug;

use shield_core::{
    Authority, AuthorityId, AuthorityKind, GeoPoint, Hazard, HazardId, ShelterId, ShieldResult,
};
use shield_spatial::PointIndex;

use crate::planner::Surroundings;

const NEAR_HAZARD_KM: f64 = 1.0;
const NEAR_HAZARD_PENALTY: f64 = 5.0;
const TRAFFIC_RADIUS_KM: f64 = 2.0;
const BLOCKED_PENALTY: f64 = 20.0;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecommendedShelter {
    pub id:          ShelterId,
    pub name:        String,
    pub location:    GeoPoint,
    /// Great-circle distance from the hazard, without penalties.
    pub distance_km: f64,
    pub score:       f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearestAuthority {
    pub id:          AuthorityId,
    pub name:        String,
    pub kind:        AuthorityKind,
    pub distance_km: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResponsePlan {
    pub hazard:    HazardId,
    /// `None` when no shelter is active.
    pub shelter:   Option<RecommendedShelter>,
    /// `None` when `authorities` is empty.
    pub authority: Option<NearestAuthority>,
}

/// Score every active shelter in `around` against `hazard` and pair the
/// best one with the nearest authority.
///
/// `around.hazards` is not consulted; only `hazard` itself is avoided.
pub fn response_plan(
    hazard:      &Hazard,
    around:      Surroundings<'_>,
    authorities: &[Authority],
) -> ShieldResult<ResponsePlan> {
    hazard.validate()?;
    for t in around.traffic {
        t.validate()?;
    }

    let traffic = PointIndex::new(around.traffic.iter().map(|t| (t.location, t)));
    let congestion_near = |at: GeoPoint| -> f64 {
        traffic
            .within_km(at, TRAFFIC_RADIUS_KM)
            .into_iter()
            .filter(|&(d, _)| d < TRAFFIC_RADIUS_KM)
            .map(|(_, t)| t.congestion + if t.blocked { BLOCKED_PENALTY } else { 0.0 })
            .sum()
    };

    let mut best: Option<RecommendedShelter> = None;
    for s in around.shelters.iter().filter(|s| s.active) {
        s.location.validate()?;
        let distance_km = hazard.location.haversine_km(s.location);
        let mut score = distance_km + congestion_near(s.location);
        if distance_km < NEAR_HAZARD_KM {
            score += NEAR_HAZARD_PENALTY;
        }
        if best.as_ref().is_none_or(|b| score < b.score) {
            best = Some(RecommendedShelter {
                id: s.id,
                name: s.name.clone(),
                location: s.location,
                distance_km,
                score,
            });
        }
    }

    let authority = PointIndex::new(authorities.iter().map(|a| (a.location, a)))
        .nearest(hazard.location)
        .map(|(distance_km, a)| NearestAuthority {
            id: a.id,
            name: a.name.clone(),
            kind: a.kind,
            distance_km,
        });

    debug!(
        hazard = %hazard.id,
        shelter = ?best.as_ref().map(|s| s.id),
        authority = ?authority.as_ref().map(|a| a.id),
        "response plan"
    );
    Ok(ResponsePlan { hazard: hazard.id, shelter: best, authority })
}
