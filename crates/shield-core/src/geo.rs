//! Geographic coordinate type and distance primitives.
//!
//! Every "is this close?" decision in the workspace (graph edges, shelter
//! exclusion, cluster radius, alert radius) goes through
//! [`GeoPoint::haversine_km`], so all radii are great-circle kilometres.

use crate::{ShieldError, ShieldResult};

/// Mean Earth radius in kilometres (IUGG).
pub const EARTH_RADIUS_KM: f64 = 6_371.0088;

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in kilometres.
    pub fn haversine_km(self, other: GeoPoint) -> f64 {
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        // Clamp guards against a > 1.0 from rounding on antipodal points.
        let c = 2.0 * a.sqrt().min(1.0).asin();
        EARTH_RADIUS_KM * c
    }

    /// `true` if `self` lies inside `bbox` (edges inclusive).
    #[inline]
    pub fn within(self, bbox: &BoundingBox) -> bool {
        bbox.contains(self)
    }

    /// Reject coordinates that are non-finite or outside ±90° / ±180°.
    ///
    /// Every public entry point that builds a graph or measures a radius
    /// calls this first; the distance functions themselves assume valid
    /// input.
    pub fn validate(self) -> ShieldResult<GeoPoint> {
        let ok = self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon);
        if ok {
            Ok(self)
        } else {
            Err(ShieldError::InvalidCoordinate { lat: self.lat, lon: self.lon })
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── BoundingBox ───────────────────────────────────────────────────────────────

/// Axis-aligned lat/lon rectangle used to constrain results to an
/// operational region.
///
/// A single box never crosses the antimeridian; `min_lon` must be
/// `<= max_lon`. [`BoundingBox::covering`] splits a radius query into two
/// boxes when it wraps.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self { min_lat, min_lon, max_lat, max_lon }
    }

    /// Inclusive containment test.
    #[inline]
    pub fn contains(&self, p: GeoPoint) -> bool {
        p.lat >= self.min_lat
            && p.lat <= self.max_lat
            && p.lon >= self.min_lon
            && p.lon <= self.max_lon
    }

    /// Boxes that together contain every point within `radius_km` of
    /// `center` (a cheap pre-filter before haversine refinement).
    ///
    /// Returns one box normally and two when the longitude span crosses the
    /// antimeridian. If the cap reaches a pole the single box covers all
    /// longitudes.
    pub fn covering(center: GeoPoint, radius_km: f64) -> Vec<BoundingBox> {
        let ang = radius_km / EARTH_RADIUS_KM;
        let d_lat = ang.to_degrees();
        let min_lat = center.lat - d_lat;
        let max_lat = center.lat + d_lat;
        if max_lat >= 90.0 || min_lat <= -90.0 {
            return vec![Self::new(min_lat.max(-90.0), -180.0, max_lat.min(90.0), 180.0)];
        }

        // Widest longitude offset reached by the spherical cap.
        let ratio = ang.sin() / center.lat.to_radians().cos();
        if ratio >= 1.0 {
            return vec![Self::new(min_lat, -180.0, max_lat, 180.0)];
        }
        let d_lon = ratio.asin().to_degrees();
        let (west, east) = (center.lon - d_lon, center.lon + d_lon);
        if west < -180.0 {
            vec![
                Self::new(min_lat, west + 360.0, max_lat, 180.0),
                Self::new(min_lat, -180.0, max_lat, east),
            ]
        } else if east > 180.0 {
            vec![
                Self::new(min_lat, west, max_lat, 180.0),
                Self::new(min_lat, -180.0, max_lat, east - 360.0),
            ]
        } else {
            vec![Self::new(min_lat, west, max_lat, east)]
        }
    }
}
