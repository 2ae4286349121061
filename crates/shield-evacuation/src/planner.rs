//! Evacuation shelter policy.
//!
//! 1. Exclusion radius = `max(min_exclusion_km, severity / 2)`.
//! 2. Shelters strictly closer to the hazard than that are unsafe.
//! 3. Of the safe ones, pick the nearest to the user (great-circle).
//! 4. If none are safe, fall back to *some* shelter: a far, risky shelter
//!    beats none.  The fallback is flagged on the plan so callers can warn.
//! 5. Route there with [`RouteService::compute_route`].
//! 6. ETA is a flat `distance_km * minutes_per_km`, not traffic-aware.

use std::cmp::Ordering;

use tracing::{debug, warn};

use shield_core::{
    EvacuationConfig, GeoPoint, Hazard, Shelter, ShelterId, ShieldResult, TrafficPoint,
};
use shield_spatial::{GeometryResolver, NoGeometry, RouteOutcome, RouteService};

/// Minimum safe distance between `hazard` and an evacuation shelter.
pub fn exclusion_radius_km(config: &EvacuationConfig, severity: u8) -> f64 {
    config.min_exclusion_km.max(severity as f64 / 2.0)
}

/// The live records a plan is computed against.
#[derive(Copy, Clone, Debug, Default)]
pub struct Surroundings<'a> {
    pub shelters: &'a [Shelter],
    pub traffic:  &'a [TrafficPoint],
    /// Hazards to route around; non-live ones are ignored by the router.
    pub hazards:  &'a [Hazard],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlanStatus {
    Ready,
    /// No active shelter exists in the operating region.
    NoShelterAvailable,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChosenShelter {
    pub id:          ShelterId,
    pub name:        String,
    pub location:    GeoPoint,
    /// Great-circle distance from the user.
    pub distance_km: f64,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvacuationPlan {
    pub status:              PlanStatus,
    pub shelter:             Option<ChosenShelter>,
    pub exclusion_radius_km: f64,
    /// `true` when no shelter cleared the exclusion radius and the fallback
    /// picked one anyway.
    pub fallback:            bool,
    pub distance_km:         f64,
    pub eta_minutes:         f64,
    pub route:               RouteOutcome,
}

impl EvacuationPlan {
    fn unavailable(exclusion_radius_km: f64) -> Self {
        Self {
            status: PlanStatus::NoShelterAvailable,
            shelter: None,
            exclusion_radius_km,
            fallback: false,
            distance_km: 0.0,
            eta_minutes: 0.0,
            route: RouteOutcome::NoCandidate,
        }
    }
}

// ── EvacuationPlanner ─────────────────────────────────────────────────────────

pub struct EvacuationPlanner<G: GeometryResolver = NoGeometry> {
    config: EvacuationConfig,
    routes: RouteService<G>,
}

impl<G: GeometryResolver> EvacuationPlanner<G> {
    pub fn new(config: EvacuationConfig, routes: RouteService<G>) -> Self {
        Self { config, routes }
    }

    pub fn config(&self) -> &EvacuationConfig {
        &self.config
    }

    pub fn routes(&self) -> &RouteService<G> {
        &self.routes
    }

    /// Pick a shelter for someone at `user` fleeing `hazard`, and route
    /// there.
    pub fn plan_evacuation(
        &self,
        user:   GeoPoint,
        hazard: &Hazard,
        around: Surroundings<'_>,
    ) -> ShieldResult<EvacuationPlan> {
        user.validate()?;
        hazard.validate()?;

        let radius = exclusion_radius_km(&self.config, hazard.severity);
        let candidates: Vec<&Shelter> = around
            .shelters
            .iter()
            .filter(|s| s.active)
            .filter(|s| self.config.region.is_none_or(|r| s.location.within(&r)))
            .collect();
        for s in &candidates {
            s.location.validate()?;
        }

        let safe = candidates
            .iter()
            .filter(|s| s.location.haversine_km(hazard.location) >= radius)
            .map(|s| (user.haversine_km(s.location), *s))
            .min_by(|a, b| a.0.total_cmp(&b.0));

        let (shelter, fallback) = match safe {
            Some((_, s)) => (s, false),
            None => match candidates.iter().min_by(|a, b| by_lat_lon(a.location, b.location)) {
                Some(s) => {
                    warn!(
                        hazard = %hazard.id,
                        shelter = %s.id,
                        radius_km = radius,
                        "no shelter outside exclusion radius; using fallback"
                    );
                    (*s, true)
                }
                None => {
                    debug!(hazard = %hazard.id, "no active shelter available");
                    return Ok(EvacuationPlan::unavailable(radius));
                }
            },
        };

        let distance_km = user.haversine_km(shelter.location);
        let route =
            self.routes
                .compute_route(user, shelter.location, around.traffic, around.hazards)?;

        Ok(EvacuationPlan {
            status: PlanStatus::Ready,
            shelter: Some(ChosenShelter {
                id:          shelter.id,
                name:        shelter.name.clone(),
                location:    shelter.location,
                distance_km,
            }),
            exclusion_radius_km: radius,
            fallback,
            distance_km,
            eta_minutes: distance_km * self.config.minutes_per_km,
            route,
        })
    }
}

fn by_lat_lon(a: GeoPoint, b: GeoPoint) -> Ordering {
    a.lat.total_cmp(&b.lat).then(a.lon.total_cmp(&b.lon))
}
