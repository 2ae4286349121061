//! Road geometry from an OSRM `route` endpoint (feature = `"osrm"`).
//!
//! Requests `overview=full&geometries=geojson` and returns the first route's
//! coordinates.  Transport errors, non-2xx statuses, and malformed bodies all
//! degrade to `None` with a `warn!`; the caller's route is never affected.

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use shield_core::GeoPoint;

use crate::geometry::{GeometryResolver, Polyline};

/// Public demo server.  Fine for development, rate-limited in practice.
pub const DEFAULT_OSRM_URL: &str = "http://router.project-osrm.org";

#[derive(Deserialize)]
struct OsrmResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    geometry: OsrmGeometry,
}

#[derive(Deserialize)]
struct OsrmGeometry {
    /// GeoJSON order: `[lon, lat]`.
    coordinates: Vec<[f64; 2]>,
}

/// Blocking OSRM client with a hard request timeout.
pub struct OsrmResolver {
    client:   reqwest::blocking::Client,
    base_url: String,
    profile:  String,
}

impl OsrmResolver {
    /// Build a resolver against `base_url` (no trailing slash needed) using
    /// the `driving` profile.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            profile:  "driving".to_owned(),
        })
    }

    /// Switch the OSRM profile (`driving`, `walking`, `cycling`, …).
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// `{base}/route/v1/{profile}/{lon,lat;lon,lat;…}`
    pub fn route_url(&self, coords: &[GeoPoint]) -> String {
        let path = coords
            .iter()
            .map(|p| format!("{},{}", p.lon, p.lat))
            .collect::<Vec<_>>()
            .join(";");
        format!("{}/route/v1/{}/{}", self.base_url, self.profile, path)
    }

    fn fetch(&self, coords: &[GeoPoint]) -> reqwest::Result<String> {
        self.client
            .get(self.route_url(coords))
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()?
            .error_for_status()?
            .text()
    }
}

/// First route's geometry from an OSRM JSON body, flipped from GeoJSON
/// `[lon, lat]` into [`GeoPoint`]s.
///
/// `None` for malformed JSON, an empty `routes` array, an empty line, or
/// any coordinate out of range.
pub(crate) fn decode(body: &str) -> Option<Polyline> {
    let response: OsrmResponse = match serde_json::from_str(body) {
        Ok(r) => r,
        Err(e) => {
            warn!(error = %e, "malformed OSRM response");
            return None;
        }
    };
    let route = response.routes.into_iter().next()?;
    let line: Polyline = route
        .geometry
        .coordinates
        .into_iter()
        .map(|[lon, lat]| GeoPoint::new(lat, lon))
        .collect();
    if let Some(bad) = line.iter().find(|p| p.validate().is_err()) {
        warn!(point = %bad, "OSRM geometry out of range");
        return None;
    }
    (!line.is_empty()).then_some(line)
}

impl GeometryResolver for OsrmResolver {
    fn resolve(&self, coords: &[GeoPoint]) -> Option<Polyline> {
        if coords.len() < 2 {
            return None;
        }
        match self.fetch(coords) {
            Ok(body) => decode(&body),
            Err(e) => {
                warn!(error = %e, "OSRM lookup failed; route left without geometry");
                None
            }
        }
    }
}
