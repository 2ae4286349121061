//! Coordinate-bounded proximity queries over live records.
//!
//! An R-tree (via `rstar`) over raw `[lat, lon]` degrees answers envelope
//! queries; results are then refined with exact haversine distance, so a
//! query for "within 3 km" means 3 great-circle kilometres regardless of
//! latitude.

use rstar::{AABB, PointDistance, RTree, RTreeObject};

use shield_core::{BoundingBox, GeoPoint};

/// Envelope padding so points sitting exactly on the radius survive float
/// rounding in the degree conversion.
const SLACK_KM: f64 = 1e-6;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct Entry {
    point: [f64; 2], // [lat, lon]
    slot:  usize,
}

impl RTreeObject for Entry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for Entry {
    /// Squared Euclidean distance in degree space; only used to seed the
    /// exact nearest-neighbour search.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlon = self.point[1] - point[1];
        dlat * dlat + dlon * dlon
    }
}

fn envelope(bbox: &BoundingBox) -> AABB<[f64; 2]> {
    AABB::from_corners([bbox.min_lat, bbox.min_lon], [bbox.max_lat, bbox.max_lon])
}

// ── PointIndex ────────────────────────────────────────────────────────────────

/// Read-only spatial index over `(location, item)` pairs.
///
/// Results are always returned in insertion order (or by distance, then
/// insertion order), never in R-tree traversal order, so callers see
/// deterministic output for deterministic input.
pub struct PointIndex<T> {
    items: Vec<(GeoPoint, T)>,
    tree:  RTree<Entry>,
}

impl<T> PointIndex<T> {
    /// Bulk-load the index.  O(N log N).
    pub fn new(items: impl IntoIterator<Item = (GeoPoint, T)>) -> Self {
        let items: Vec<(GeoPoint, T)> = items.into_iter().collect();
        let entries: Vec<Entry> = items
            .iter()
            .enumerate()
            .map(|(slot, (p, _))| Entry { point: [p.lat, p.lon], slot })
            .collect();
        Self { items, tree: RTree::bulk_load(entries) }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items whose location lies inside `bbox`, in insertion order.
    pub fn in_bbox(&self, bbox: &BoundingBox) -> Vec<&T> {
        let mut slots: Vec<usize> = self
            .tree
            .locate_in_envelope(&envelope(bbox))
            .map(|e| e.slot)
            .collect();
        slots.sort_unstable();
        slots.into_iter().map(|s| &self.items[s].1).collect()
    }

    /// Slots of every item inside the covering boxes of a `radius_km` cap
    /// around `center`, sorted and deduplicated.
    fn candidates(&self, center: GeoPoint, radius_km: f64) -> Vec<usize> {
        let mut slots: Vec<usize> = BoundingBox::covering(center, radius_km + SLACK_KM)
            .iter()
            .flat_map(|bbox| self.tree.locate_in_envelope(&envelope(bbox)).map(|e| e.slot))
            .collect();
        slots.sort_unstable();
        slots.dedup();
        slots
    }

    /// Items within `radius_km` (inclusive) of `center`, paired with their
    /// distance, in insertion order.  Radii that wrap the antimeridian or
    /// reach a pole are handled.
    pub fn within_km(&self, center: GeoPoint, radius_km: f64) -> Vec<(f64, &T)> {
        self.candidates(center, radius_km)
            .into_iter()
            .filter_map(|s| {
                let (p, item) = &self.items[s];
                let d = center.haversine_km(*p);
                (d <= radius_km).then_some((d, item))
            })
            .collect()
    }

    /// The item nearest to `center` by great-circle distance.  Ties go to the
    /// earliest inserted item.
    ///
    /// The degree-space nearest neighbour gives an upper bound `d`; every
    /// point within `d` km is inside `BoundingBox::covering(center, d)`, so
    /// scanning those boxes is exact even when the true nearest item sits
    /// across the antimeridian.
    pub fn nearest(&self, center: GeoPoint) -> Option<(f64, &T)> {
        let seed = self.tree.nearest_neighbor(&[center.lat, center.lon])?;
        let bound = center.haversine_km(self.items[seed.slot].0);

        self.candidates(center, bound)
            .into_iter()
            .map(|s| (center.haversine_km(self.items[s].0), s))
            .chain(std::iter::once((bound, seed.slot)))
            .min_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)))
            .map(|(d, s)| (d, &self.items[s].1))
    }
}
