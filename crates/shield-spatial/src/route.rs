//! Route planning over on-demand proximity graphs.
//!
//! [`RouteService`] owns the pipeline `validate → build graph → Dijkstra →
//! reconstruct → enrich` and exposes it for three requests:
//!
//! | Method                              | Graph                                    | Target                    |
//! |-------------------------------------|------------------------------------------|---------------------------|
//! | `compute_route`                     | start + traffic + live hazards + end     | the end node              |
//! | `route_to_nearest_shelter`          | origin + traffic + active shelters       | cheapest reachable shelter |
//! | `route_hazard_to_nearest_shelter`   | hazard + traffic + active shelters       | cheapest reachable shelter |
//!
//! "No route" and "no shelter" are ordinary outcomes, returned as
//! [`RouteOutcome`] variants.  Only malformed input produces an `Err`.

use shield_core::{
    GeoPoint, Hazard, NodeIndex, RoutingConfig, Shelter, ShelterId, ShieldResult, TrafficPoint,
};
use tracing::{debug, warn};

use crate::geometry::{GeometryResolver, NoGeometry, Polyline};
use crate::graph::{GraphNode, NodeKind, ProximityGraph, ProximityGraphBuilder};
use crate::solver::{ShortestPaths, shortest_paths};

// ── Results ───────────────────────────────────────────────────────────────────

/// A computed route.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteResult {
    /// Sum of edge weights along `node_path`.
    pub cost:      f64,
    /// Graph nodes visited, origin first.
    pub node_path: Vec<GeoPoint>,
    /// Road geometry between the same points, when a resolver supplied one.
    pub geometry:  Option<Polyline>,
}

/// The shelter picked by a nearest-shelter search, with the route to it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NearestShelter {
    pub shelter: ShelterId,
    pub route:   RouteResult,
}

/// Outcome of a routing request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RouteOutcome<T = RouteResult> {
    Found(T),
    /// The target exists but no chain of proximity edges reaches it.
    NoRoute,
    /// There was nothing to route to (e.g. no active shelters).
    NoCandidate,
}

impl<T> RouteOutcome<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }

    pub fn found(&self) -> Option<&T> {
        match self {
            RouteOutcome::Found(t) => Some(t),
            _ => None,
        }
    }

    pub fn into_found(self) -> Option<T> {
        match self {
            RouteOutcome::Found(t) => Some(t),
            _ => None,
        }
    }
}

// ── RouteService ──────────────────────────────────────────────────────────────

/// Stateless route planner.  Cheap to share across threads; every call
/// builds and drops its own graph.
pub struct RouteService<G: GeometryResolver = NoGeometry> {
    config:   RoutingConfig,
    resolver: G,
}

impl RouteService<NoGeometry> {
    /// A service that never enriches routes with road geometry.
    pub fn without_geometry(config: RoutingConfig) -> ShieldResult<Self> {
        Self::new(config, NoGeometry)
    }
}

impl<G: GeometryResolver> RouteService<G> {
    pub fn new(config: RoutingConfig, resolver: G) -> ShieldResult<Self> {
        config.validate()?;
        Ok(Self { config, resolver })
    }

    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Least-cost route from `start` to `end`, detouring around congested,
    /// blocked, and hazardous points.
    ///
    /// Only live (`Active`/`Critical`) hazards are placed in the graph.
    pub fn compute_route(
        &self,
        start:   GeoPoint,
        end:     GeoPoint,
        traffic: &[TrafficPoint],
        hazards: &[Hazard],
    ) -> ShieldResult<RouteOutcome> {
        start.validate()?;
        end.validate()?;
        validate_traffic(traffic)?;
        for h in hazards {
            h.validate()?;
        }

        let mut b = ProximityGraphBuilder::with_capacity(
            &self.config,
            traffic.len() + hazards.len() + 2,
        );
        let source = b.add_node(GraphNode::start(start));
        for t in traffic {
            b.add_node(GraphNode::traffic(t));
        }
        for h in hazards.iter().filter(|h| h.status.is_live()) {
            b.add_node(GraphNode::hazard(h));
        }
        let target = b.add_node(GraphNode::end(end));

        let graph = b.build();
        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "route graph built"
        );

        let paths = shortest_paths(&graph, source);
        if !paths.is_reachable(target) {
            debug!(%start, %end, "no route");
            return Ok(RouteOutcome::NoRoute);
        }
        Ok(RouteOutcome::Found(self.finish(&graph, &paths, target)))
    }

    /// Route from `origin` to whichever active shelter is cheapest to reach.
    pub fn route_to_nearest_shelter(
        &self,
        origin:   GeoPoint,
        traffic:  &[TrafficPoint],
        shelters: &[Shelter],
    ) -> ShieldResult<RouteOutcome<NearestShelter>> {
        origin.validate()?;
        self.nearest_shelter(GraphNode::start(origin), traffic, shelters)
    }

    /// Like [`route_to_nearest_shelter`](Self::route_to_nearest_shelter) but
    /// starting at a hazard's location.
    pub fn route_hazard_to_nearest_shelter(
        &self,
        hazard:   &Hazard,
        traffic:  &[TrafficPoint],
        shelters: &[Shelter],
    ) -> ShieldResult<RouteOutcome<NearestShelter>> {
        hazard.validate()?;
        self.nearest_shelter(GraphNode::disaster(hazard), traffic, shelters)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn nearest_shelter(
        &self,
        origin:   GraphNode,
        traffic:  &[TrafficPoint],
        shelters: &[Shelter],
    ) -> ShieldResult<RouteOutcome<NearestShelter>> {
        validate_traffic(traffic)?;
        let candidates: Vec<&Shelter> = shelters.iter().filter(|s| s.active).collect();
        for s in &candidates {
            s.location.validate()?;
        }
        if candidates.is_empty() {
            return Ok(RouteOutcome::NoCandidate);
        }

        let mut b = ProximityGraphBuilder::with_capacity(
            &self.config,
            traffic.len() + candidates.len() + 1,
        );
        let source = b.add_node(origin);
        for t in traffic {
            b.add_node(GraphNode::traffic(t));
        }
        let first_shelter = b.node_count();
        for s in &candidates {
            b.add_node(GraphNode::shelter(s.location));
        }

        let graph = b.build();
        let paths = shortest_paths(&graph, source);

        // `min_by` keeps the first (lowest index) shelter on ties.
        let best = graph
            .nodes_of_kind(NodeKind::Shelter)
            .filter(|&n| paths.is_reachable(n))
            .min_by(|&a, &b| paths.distance(a).total_cmp(&paths.distance(b)));

        let Some(target) = best else {
            debug!(shelters = candidates.len(), "no shelter reachable");
            return Ok(RouteOutcome::NoRoute);
        };

        let shelter = candidates[target.index() - first_shelter].id;
        debug!(%shelter, cost = paths.distance(target), "nearest shelter chosen");
        Ok(RouteOutcome::Found(NearestShelter {
            shelter,
            route: self.finish(&graph, &paths, target),
        }))
    }

    fn finish(&self, graph: &ProximityGraph, paths: &ShortestPaths, target: NodeIndex) -> RouteResult {
        let node_path: Vec<GeoPoint> = paths
            .path_to(target)
            .into_iter()
            .map(|n| graph.node(n).point)
            .collect();
        let geometry = self.enrich(&node_path);
        RouteResult { cost: paths.distance(target), node_path, geometry }
    }

    fn enrich(&self, node_path: &[GeoPoint]) -> Option<Polyline> {
        if node_path.len() < 2 {
            return None;
        }
        let geometry = self.resolver.resolve(node_path);
        match &geometry {
            Some(line) if line.is_empty() => {
                warn!("road geometry empty; omitting");
                None
            }
            Some(_) => geometry,
            None => None,
        }
    }
}

fn validate_traffic(traffic: &[TrafficPoint]) -> ShieldResult<()> {
    traffic.iter().try_for_each(TrafficPoint::validate)
}
