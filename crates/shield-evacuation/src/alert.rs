//! Proximity alerts: tell a user about nearby hazards they care about,
//! each with an evacuation plan attached.

use tracing::debug;

use shield_core::{GeoPoint, Hazard, HazardId, HazardKind, ShieldResult};
use shield_spatial::{GeometryResolver, PointIndex};

use crate::planner::{EvacuationPlan, EvacuationPlanner, Surroundings};

/// `true` if `user` is within `radius_km` (inclusive) of `hazard`.
pub fn in_danger_zone(user: GeoPoint, hazard: &Hazard, radius_km: f64) -> bool {
    user.haversine_km(hazard.location) <= radius_km
}

/// Per-user alert filter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlertPreference {
    pub radius_km:    f64,
    pub min_severity: u8,
    pub kinds:        Vec<HazardKind>,
    pub enabled:      bool,
}

impl Default for AlertPreference {
    fn default() -> Self {
        Self {
            radius_km:    5.0,
            min_severity: 5,
            kinds:        HazardKind::ALL.to_vec(),
            enabled:      true,
        }
    }
}

impl AlertPreference {
    fn wants(&self, hazard: &Hazard) -> bool {
        hazard.severity >= self.min_severity && self.kinds.contains(&hazard.kind)
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProximityAlert {
    pub hazard:      HazardId,
    pub distance_km: f64,
    pub plan:        EvacuationPlan,
}

impl<G: GeometryResolver> EvacuationPlanner<G> {
    /// Alerts for every live hazard within the user's radius that matches
    /// their preferences and that they have not already been alerted to.
    ///
    /// Hazards are taken from `around.hazards`; results follow their order.
    pub fn alerts_for(
        &self,
        user:            GeoPoint,
        pref:            &AlertPreference,
        already_alerted: &[HazardId],
        around:          Surroundings<'_>,
    ) -> ShieldResult<Vec<ProximityAlert>> {
        user.validate()?;
        if !pref.enabled {
            return Ok(Vec::new());
        }

        let index = PointIndex::new(
            around
                .hazards
                .iter()
                .filter(|h| h.status.is_live())
                .map(|h| (h.location, h)),
        );

        let mut alerts = Vec::new();
        for (distance_km, hazard) in index.within_km(user, pref.radius_km) {
            if already_alerted.contains(&hazard.id) || !pref.wants(hazard) {
                continue;
            }
            let plan = self.plan_evacuation(user, hazard, around)?;
            alerts.push(ProximityAlert { hazard: hazard.id, distance_km, plan });
        }
        debug!(%user, alerts = alerts.len(), "proximity check");
        Ok(alerts)
    }
}
