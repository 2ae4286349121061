//! `shield-spatial` — proximity graphs, shortest paths, and route planning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                     |
//! |--------------|--------------------------------------------------------------|
//! | [`graph`]    | `GraphNode`, `NodeKind`, `ProximityGraph`, `ProximityGraphBuilder` |
//! | [`solver`]   | `shortest_paths` (Dijkstra), `ShortestPaths`                 |
//! | [`route`]    | `RouteService`, `RouteResult`, `RouteOutcome`                |
//! | [`geometry`] | `GeometryResolver` trait, `NoGeometry`, `Polyline`           |
//! | [`index`]    | `PointIndex<T>` (R-tree + haversine refinement)              |
//! | [`osrm`]     | `OsrmResolver` (feature = `"osrm"` only)                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `osrm`  | Enables road-geometry lookups via `reqwest`.                 |
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |
//!
//! # Graph model
//!
//! There is no street network.  Each request builds a fresh graph from the
//! records it was handed, connecting every pair of points closer than
//! `RoutingConfig::proximity_radius_km`.  Congestion and blockage are
//! charged on *entering* a node, so edges are asymmetric.

pub mod geometry;
pub mod graph;
pub mod index;
pub mod route;
pub mod solver;

#[cfg(feature = "osrm")]
pub mod osrm;

#[cfg(test)]
mod tests;

pub use geometry::{GeometryResolver, NoGeometry, Polyline};
pub use graph::{Edge, GraphNode, NodeKind, ProximityGraph, ProximityGraphBuilder};
pub use index::PointIndex;
pub use route::{NearestShelter, RouteOutcome, RouteResult, RouteService};
pub use solver::{ShortestPaths, shortest_paths};

#[cfg(feature = "osrm")]
pub use osrm::OsrmResolver;
