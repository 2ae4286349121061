//! Optional road-geometry enrichment.
//!
//! A resolver turns the straight-line node path into a realistic polyline.
//! It is strictly best-effort: any failure is reported as `None` and the
//! route's cost and node path stand as computed.

use shield_core::GeoPoint;

/// An ordered sequence of coordinates describing a drawn route.
pub type Polyline = Vec<GeoPoint>;

/// Pluggable road-geometry lookup.
///
/// Implementations must bound their own latency (see
/// `RoutingConfig::geometry_timeout`) and swallow transport or decoding
/// errors, returning `None`.
///
/// Closures `Fn(&[GeoPoint]) -> Option<Polyline>` implement this trait, which
/// is convenient for tests.
pub trait GeometryResolver: Send + Sync {
    fn resolve(&self, coords: &[GeoPoint]) -> Option<Polyline>;
}

/// A resolver that never enriches.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoGeometry;

impl GeometryResolver for NoGeometry {
    fn resolve(&self, _coords: &[GeoPoint]) -> Option<Polyline> {
        None
    }
}

impl<F> GeometryResolver for F
where
    F: Fn(&[GeoPoint]) -> Option<Polyline> + Send + Sync,
{
    fn resolve(&self, coords: &[GeoPoint]) -> Option<Polyline> {
        self(coords)
    }
}
