//! Unit tests for shield-spatial.
//!
//! All graphs are built from hand-placed points around (30°N, 78°E); at that
//! latitude 0.1° of longitude is ≈ 9.63 km and 0.1° of latitude ≈ 11.12 km.

#[cfg(test)]
mod helpers {
    use shield_core::{
        GeoPoint, Hazard, HazardId, HazardKind, RoutingConfig, Shelter, ShelterId, Timestamp,
    };

    pub fn p(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon)
    }

    /// Routing config with a 15 km radius, so points 0.2° of longitude apart
    /// are *not* directly connected but 0.1° apart are.
    pub fn tight() -> RoutingConfig {
        RoutingConfig { proximity_radius_km: 15.0, ..RoutingConfig::default() }
    }

    pub fn hazard(id: u64, at: GeoPoint, severity: u8) -> Hazard {
        Hazard::new(HazardId(id), HazardKind::Flood, at, severity, Timestamp(0))
    }

    pub fn shelter(id: u64, at: GeoPoint) -> Shelter {
        Shelter::at(ShelterId(id), format!("shelter-{id}"), at)
    }

    pub fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }
}

// ── Graph builder ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use super::helpers::{p, tight};
    use crate::{GraphNode, NodeKind, ProximityGraphBuilder};
    use shield_core::{NodeIndex, RoutingConfig, TrafficPoint};

    #[test]
    fn empty_build() {
        let g = ProximityGraphBuilder::new(&RoutingConfig::default()).build();
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn indices_are_insertion_positions() {
        let mut b = ProximityGraphBuilder::new(&RoutingConfig::default());
        let ids: Vec<NodeIndex> = (0..5)
            .map(|i| b.add_node(GraphNode::start(p(30.0 + 0.01 * i as f64, 78.0))))
            .collect();
        assert_eq!(ids, (0..5).map(NodeIndex).collect::<Vec<_>>());

        let g = b.build();
        assert!(g.nodes_of_kind(NodeKind::Start).eq(ids.iter().copied()));
        assert!(g.edges().all(|e| e.from.index() < 5 && e.to.index() < 5));
    }

    #[test]
    fn radius_cuts_edges() {
        let mut b = ProximityGraphBuilder::new(&tight());
        let a = b.add_node(GraphNode::start(p(30.0, 78.0)));
        let m = b.add_node(GraphNode::traffic(&TrafficPoint::new(p(30.0, 78.1), 0.0, false)));
        let c = b.add_node(GraphNode::end(p(30.0, 78.2)));
        let g = b.build();

        assert_eq!(g.out_degree(a), 1); // a→m only
        assert_eq!(g.out_degree(m), 2); // m→a, m→c
        assert_eq!(g.out_degree(c), 1);
        assert!(g.edge_weight(a, c).is_none());
        assert!(g.edge_weight(a, m).is_some());
    }

    #[test]
    fn coincident_points_still_connect() {
        let cfg = RoutingConfig::default();
        let mut b = ProximityGraphBuilder::new(&cfg);
        let a = b.add_node(GraphNode::start(p(30.0, 78.0)));
        let c = b.add_node(GraphNode::end(p(30.0, 78.0)));
        let g = b.build();
        assert_eq!(g.edge_weight(a, c), Some(0.0));
        assert_eq!(g.edge_weight(c, a), Some(0.0));
        // No self loops.
        assert!(g.edge_weight(a, a).is_none());
    }

    #[test]
    fn penalties_attach_to_destination() {
        let cfg = RoutingConfig::default();
        let mut b = ProximityGraphBuilder::new(&cfg);
        let a = b.add_node(GraphNode::start(p(30.0, 78.0)));
        let t = b.add_node(GraphNode::traffic(&TrafficPoint::new(p(30.0, 78.0), 4.0, true)));
        let g = b.build();

        // Entering t: 4 * 5 + 100.  Leaving t: free.
        assert_eq!(g.edge_weight(a, t), Some(4.0 * cfg.congestion_weight + cfg.block_penalty));
        assert_eq!(g.edge_weight(t, a), Some(0.0));
    }

    #[test]
    fn hazard_nodes_are_blocked_with_severity_congestion() {
        let h = super::helpers::hazard(1, p(30.0, 78.0), 7);
        let node = GraphNode::hazard(&h);
        assert_eq!(node.kind, NodeKind::Hazard);
        assert!(node.blocked);
        assert_eq!(node.congestion, 7.0);

        let origin = GraphNode::disaster(&h);
        assert_eq!(origin.kind, NodeKind::Disaster);
        assert!(!origin.blocked);
    }

    #[test]
    fn edges_iterate_in_index_order() {
        let mut b = ProximityGraphBuilder::new(&RoutingConfig::default());
        let pts: Vec<_> = (0..4).map(|i| p(30.0, 78.0 + i as f64 * 0.01)).collect();
        for &pt in &pts {
            b.add_node(GraphNode::start(pt));
        }
        let g = b.build();
        let pairs: Vec<(u32, u32)> = g.edges().map(|e| (e.from.0, e.to.0)).collect();
        let mut sorted = pairs.clone();
        sorted.sort();
        assert_eq!(pairs, sorted);
        assert_eq!(pairs.len(), 12);
        assert!(g.edges().all(|e| e.weight >= 0.0 && e.weight.is_finite()));
        assert_eq!(g.nodes_of_kind(NodeKind::Start).count(), 4);
        assert_eq!(g.node(NodeIndex(2)).point, pts[2]);
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod solver {
    use super::helpers::{approx, p, tight};
    use crate::{GraphNode, ProximityGraph, ProximityGraphBuilder, shortest_paths};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use shield_core::{NodeIndex, RoutingConfig, TrafficPoint};

    #[test]
    fn source_path_is_itself() {
        let mut b = ProximityGraphBuilder::new(&RoutingConfig::default());
        let a = b.add_node(GraphNode::start(p(30.0, 78.0)));
        let g = b.build();
        let sp = shortest_paths(&g, a);
        assert_eq!(sp.path_to(a), vec![a]);
        assert_eq!(sp.distance(a), 0.0);
    }

    #[test]
    fn unreachable_yields_empty_path() {
        let mut b = ProximityGraphBuilder::new(&tight());
        let a = b.add_node(GraphNode::start(p(30.0, 78.0)));
        let far = b.add_node(GraphNode::end(p(31.0, 79.0)));
        let g = b.build();
        let sp = shortest_paths(&g, a);
        assert!(!sp.is_reachable(far));
        assert!(sp.distance(far).is_infinite());
        assert!(sp.path_to(far).is_empty());
        assert!(sp.predecessor(far).is_none());
    }

    #[test]
    fn relays_through_intermediate() {
        let cfg = tight();
        let mut b = ProximityGraphBuilder::new(&cfg);
        let a = b.add_node(GraphNode::start(p(30.0, 78.0)));
        let m = b.add_node(GraphNode::traffic(&TrafficPoint::new(p(30.0, 78.1), 0.0, false)));
        let c = b.add_node(GraphNode::end(p(30.0, 78.2)));
        let g = b.build();

        let sp = shortest_paths(&g, a);
        assert_eq!(sp.path_to(c), vec![a, m, c]);
        let expected = (p(30.0, 78.0).haversine_km(p(30.0, 78.1))
            + p(30.0, 78.1).haversine_km(p(30.0, 78.2)))
            * cfg.distance_weight_per_km;
        assert!(approx(sp.distance(c), expected));
    }

    /// Minimum cost over all simple paths, by exhaustive DFS.
    fn brute_force(g: &ProximityGraph, from: NodeIndex, to: NodeIndex) -> f64 {
        fn dfs(
            g: &ProximityGraph,
            cur: NodeIndex,
            to: NodeIndex,
            cost: f64,
            seen: &mut Vec<bool>,
            best: &mut f64,
        ) {
            if cur == to {
                *best = best.min(cost);
                return;
            }
            for &(n, w) in g.neighbors(cur) {
                if !seen[n.index()] {
                    seen[n.index()] = true;
                    dfs(g, n, to, cost + w, seen, best);
                    seen[n.index()] = false;
                }
            }
        }
        let mut seen = vec![false; g.node_count()];
        seen[from.index()] = true;
        let mut best = f64::INFINITY;
        dfs(g, from, to, 0.0, &mut seen, &mut best);
        best
    }

    #[test]
    fn matches_brute_force_on_small_graphs() {
        let cfg = RoutingConfig { proximity_radius_km: 10.0, ..RoutingConfig::default() };
        let mut rng = SmallRng::seed_from_u64(7);

        for _ in 0..300 {
            let n = rng.gen_range(2..=6);
            let mut b = ProximityGraphBuilder::new(&cfg);
            for _ in 0..n {
                let t = TrafficPoint::new(
                    p(30.0 + rng.gen_range(0.0..0.2), 78.0 + rng.gen_range(0.0..0.2)),
                    rng.gen_range(0.0..=10.0),
                    rng.gen_bool(0.3),
                );
                b.add_node(GraphNode::traffic(&t));
            }
            let g = b.build();
            let src = NodeIndex(0);
            let sp = shortest_paths(&g, src);

            for t in 0..n as u32 {
                let target = NodeIndex(t);
                let expected = brute_force(&g, src, target);
                let got = sp.distance(target);
                if expected.is_infinite() {
                    assert!(got.is_infinite());
                    assert!(sp.path_to(target).is_empty());
                } else {
                    assert!((got - expected).abs() < 1e-9, "got {got}, expected {expected}");
                    // The reconstructed path must actually cost what was reported.
                    let path = sp.path_to(target);
                    let walked: f64 = path
                        .windows(2)
                        .map(|w| g.edge_weight(w[0], w[1]).unwrap())
                        .sum();
                    assert!((walked - got).abs() < 1e-9);
                    assert_eq!(path.first(), Some(&src));
                    assert_eq!(path.last(), Some(&target));
                }
            }
        }
    }
}

// ── Route service ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod route {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::helpers::{approx, hazard, p, shelter, tight};
    use crate::{GeometryResolver, Polyline, RouteOutcome, RouteService};
    use shield_core::{
        GeoPoint, HazardStatus, RoutingConfig, ShelterId, ShieldError, TrafficPoint,
    };

    fn service(cfg: RoutingConfig) -> RouteService {
        RouteService::without_geometry(cfg).unwrap()
    }

    #[test]
    fn nearest_shelter_scenario() {
        let cfg = RoutingConfig::default();
        let svc = service(cfg.clone());
        let origin = p(30.10, 78.10);
        let near = p(30.101, 78.101);
        let shelters = [shelter(1, near), shelter(2, p(30.5, 78.5))];

        let out = svc.route_to_nearest_shelter(origin, &[], &shelters).unwrap();
        let found = out.found().expect("route");
        assert_eq!(found.shelter, ShelterId(1));
        assert_eq!(found.route.node_path, vec![origin, near]);
        assert!(approx(found.route.cost, origin.haversine_km(near) * cfg.distance_weight_per_km));
        assert!(found.route.geometry.is_none());
    }

    #[test]
    fn compute_route_is_deterministic() {
        let svc = service(RoutingConfig::default());
        let traffic = [
            TrafficPoint::new(p(30.05, 78.05), 3.0, false),
            TrafficPoint::new(p(30.02, 78.08), 6.0, true),
        ];
        let hazards = [hazard(1, p(30.04, 78.04), 6)];
        let a = svc.compute_route(p(30.0, 78.0), p(30.1, 78.1), &traffic, &hazards).unwrap();
        let b = svc.compute_route(p(30.0, 78.0), p(30.1, 78.1), &traffic, &hazards).unwrap();
        assert_eq!(a, b);
        assert!(a.is_found());
    }

    #[test]
    fn isolated_end_is_no_route() {
        let svc = service(RoutingConfig::default());
        let out = svc.compute_route(p(30.0, 78.0), p(0.0, 0.0), &[], &[]).unwrap();
        assert_eq!(out, RouteOutcome::NoRoute);
    }

    #[test]
    fn empty_inputs_give_direct_route() {
        let cfg = RoutingConfig::default();
        let svc = service(cfg.clone());
        let (s, e) = (p(30.0, 78.0), p(30.1, 78.0));
        let r = svc.compute_route(s, e, &[], &[]).unwrap().into_found().unwrap();
        assert_eq!(r.node_path, vec![s, e]);
        assert!(approx(r.cost, s.haversine_km(e) * cfg.distance_weight_per_km));
    }

    #[test]
    fn prefers_traffic_relay_over_hazard_relay() {
        let svc = service(tight());
        let relay = p(30.0, 78.1);
        let out = svc
            .compute_route(
                p(30.0, 78.0),
                p(30.0, 78.2),
                &[TrafficPoint::new(relay, 2.0, false)],
                &[hazard(9, p(30.0, 78.1), 5)],
            )
            .unwrap();
        let r = out.into_found().unwrap();
        assert_eq!(r.node_path, vec![p(30.0, 78.0), relay, p(30.0, 78.2)]);
        assert!(r.cost < 100.0);
    }

    #[test]
    fn blocked_relay_is_disfavoured_not_forbidden() {
        let svc = service(tight());
        let out = svc
            .compute_route(p(30.0, 78.0), p(30.0, 78.2), &[], &[hazard(1, p(30.0, 78.1), 4)])
            .unwrap();
        let r = out.into_found().expect("hazard still bridges the gap");
        assert_eq!(r.node_path.len(), 3);
        assert!(r.cost > 100.0);
    }

    #[test]
    fn archived_hazards_are_ignored() {
        let svc = service(tight());
        let mut h = hazard(1, p(30.0, 78.1), 4);
        h.status = HazardStatus::Archived;
        let out = svc.compute_route(p(30.0, 78.0), p(30.0, 78.2), &[], &[h]).unwrap();
        assert_eq!(out, RouteOutcome::NoRoute);
    }

    #[test]
    fn no_active_shelters_is_no_candidate() {
        let svc = service(RoutingConfig::default());
        let mut closed = shelter(1, p(30.1, 78.1));
        closed.active = false;
        assert_eq!(
            svc.route_to_nearest_shelter(p(30.0, 78.0), &[], &[]).unwrap(),
            RouteOutcome::NoCandidate
        );
        assert_eq!(
            svc.route_to_nearest_shelter(p(30.0, 78.0), &[], &[closed]).unwrap(),
            RouteOutcome::NoCandidate
        );
    }

    #[test]
    fn unreachable_shelters_are_no_route() {
        let svc = service(tight());
        let out = svc
            .route_to_nearest_shelter(p(30.0, 78.0), &[], &[shelter(1, p(35.0, 70.0))])
            .unwrap();
        assert_eq!(out, RouteOutcome::NoRoute);
    }

    #[test]
    fn shelter_choice_follows_cost_not_distance() {
        // The nearer shelter sits behind a blocked traffic point in the only
        // corridor; the farther one is reachable directly.
        let svc = service(tight());
        let origin = p(30.0, 78.0);
        let blocked = TrafficPoint::new(p(30.0, 78.1), 10.0, true);
        let behind = shelter(1, p(30.0, 78.2));
        let open = shelter(2, p(30.1, 78.0));
        let out = svc
            .route_to_nearest_shelter(origin, &[blocked], &[behind, open])
            .unwrap()
            .into_found()
            .unwrap();
        assert_eq!(out.shelter, ShelterId(2));
    }

    #[test]
    fn hazard_origin_routes_to_shelter() {
        let svc = service(RoutingConfig::default());
        let h = hazard(1, p(30.0, 78.0), 9);
        let out = svc
            .route_hazard_to_nearest_shelter(&h, &[], &[shelter(4, p(30.05, 78.05))])
            .unwrap()
            .into_found()
            .unwrap();
        assert_eq!(out.shelter, ShelterId(4));
        assert_eq!(out.route.node_path.first(), Some(&h.location));
    }

    #[test]
    fn invalid_input_is_rejected() {
        let svc = service(RoutingConfig::default());
        let err = svc.compute_route(p(95.0, 78.0), p(30.0, 78.0), &[], &[]).unwrap_err();
        assert!(matches!(err, ShieldError::InvalidCoordinate { .. }));

        let bad_traffic = [TrafficPoint::new(p(30.0, 78.0), 11.0, false)];
        let err = svc
            .route_to_nearest_shelter(p(30.0, 78.0), &bad_traffic, &[shelter(1, p(30.0, 78.0))])
            .unwrap_err();
        assert!(matches!(err, ShieldError::InvalidCongestion(_)));

        let mut h = hazard(1, p(30.0, 78.0), 3);
        h.severity = 12;
        let err = svc.compute_route(p(30.0, 78.0), p(30.1, 78.0), &[], &[h]).unwrap_err();
        assert_eq!(err, ShieldError::InvalidSeverity(12));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = RoutingConfig { block_penalty: f64::NAN, ..RoutingConfig::default() };
        assert!(RouteService::without_geometry(cfg).is_err());
    }

    #[test]
    fn geometry_enrichment_is_attached() {
        let resolver = |coords: &[GeoPoint]| -> Option<Polyline> {
            let mut line = coords.to_vec();
            line.insert(1, p(30.05, 78.0));
            Some(line)
        };
        let svc = RouteService::new(RoutingConfig::default(), resolver).unwrap();
        let r = svc
            .compute_route(p(30.0, 78.0), p(30.1, 78.0), &[], &[])
            .unwrap()
            .into_found()
            .unwrap();
        assert_eq!(r.geometry.as_ref().map(Vec::len), Some(3));
    }

    struct FailingResolver(AtomicUsize);

    impl GeometryResolver for FailingResolver {
        fn resolve(&self, _coords: &[GeoPoint]) -> Option<Polyline> {
            self.0.fetch_add(1, Ordering::SeqCst);
            None
        }
    }

    #[test]
    fn geometry_failure_keeps_route() {
        let plain = service(RoutingConfig::default());
        let failing =
            RouteService::new(RoutingConfig::default(), FailingResolver(AtomicUsize::new(0)))
                .unwrap();
        let (s, e) = (p(30.0, 78.0), p(30.1, 78.0));

        let a = plain.compute_route(s, e, &[], &[]).unwrap().into_found().unwrap();
        let b = failing.compute_route(s, e, &[], &[]).unwrap().into_found().unwrap();
        assert_eq!(a.cost, b.cost);
        assert_eq!(a.node_path, b.node_path);
        assert!(b.geometry.is_none());
    }

    #[test]
    fn empty_geometry_is_dropped() {
        let resolver = |_: &[GeoPoint]| -> Option<Polyline> { Some(Vec::new()) };
        let svc = RouteService::new(RoutingConfig::default(), resolver).unwrap();
        let r = svc
            .compute_route(p(30.0, 78.0), p(30.1, 78.0), &[], &[])
            .unwrap()
            .into_found()
            .unwrap();
        assert!(r.geometry.is_none());
    }
}

// ── Point index ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod index {
    use super::helpers::p;
    use crate::PointIndex;
    use shield_core::BoundingBox;

    fn sample() -> PointIndex<&'static str> {
        PointIndex::new([
            (p(30.00, 78.00), "a"),
            (p(30.01, 78.00), "b"), // ~1.1 km north of a
            (p(30.00, 78.05), "c"), // ~4.8 km east of a
            (p(31.00, 78.00), "d"), // ~111 km north
        ])
    }

    #[test]
    fn within_km_refines_by_haversine() {
        let idx = sample();
        let hits: Vec<&str> = idx.within_km(p(30.0, 78.0), 3.0).into_iter().map(|(_, s)| *s).collect();
        assert_eq!(hits, ["a", "b"]);

        let wider: Vec<&str> = idx.within_km(p(30.0, 78.0), 5.0).into_iter().map(|(_, s)| *s).collect();
        assert_eq!(wider, ["a", "b", "c"]);
    }

    #[test]
    fn nearest_is_exact() {
        let idx = sample();
        let (d, item) = idx.nearest(p(30.9, 78.0)).unwrap();
        assert_eq!(*item, "d");
        assert!((d - p(30.9, 78.0).haversine_km(p(31.0, 78.0))).abs() < 1e-9);

        let (_, item) = idx.nearest(p(30.004, 78.0)).unwrap();
        assert_eq!(*item, "a");
    }

    #[test]
    fn nearest_uses_great_circle_not_degrees() {
        // At 60°N a degree of longitude is half a degree of latitude.
        // In degree space `lat` (0.8°) looks closer than `lon` (1.0°);
        // on the ground `lon` is ~55.6 km away and `lat` ~89 km.
        let idx = PointIndex::new([(p(60.8, 10.0), "lat"), (p(60.0, 11.0), "lon")]);
        let (_, item) = idx.nearest(p(60.0, 10.0)).unwrap();
        assert_eq!(*item, "lon");
    }

    #[test]
    fn within_km_wraps_the_antimeridian() {
        let idx = PointIndex::new([
            (p(0.0, 179.99), "across"),
            (p(0.0, -179.0), "same-side"),
            (p(0.0, -179.98), "near"),
        ]);
        let hits: Vec<&str> = idx.within_km(p(0.0, -179.99), 5.0).into_iter().map(|(_, s)| *s).collect();
        assert_eq!(hits, ["across", "near"]);
    }

    #[test]
    fn within_km_reaches_over_the_pole() {
        let idx = PointIndex::new([(p(89.9, -175.0), "over"), (p(89.0, 10.0), "south")]);
        let hits = idx.within_km(p(89.9, 10.0), 30.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(*hits[0].1, "over");
        assert!(hits[0].0 < 23.0);
    }

    #[test]
    fn nearest_across_the_antimeridian() {
        let idx = PointIndex::new([(p(0.0, -179.0), "same-side"), (p(0.0, 179.99), "across")]);
        let (d, item) = idx.nearest(p(0.0, -179.99)).unwrap();
        assert_eq!(*item, "across");
        assert!(d < 2.3);
    }

    #[test]
    fn bbox_query_and_empty_index() {
        let idx = sample();
        let inside = idx.in_bbox(&BoundingBox::new(29.9, 77.9, 30.5, 78.1));
        assert_eq!(inside, [&"a", &"b", &"c"]);

        let empty: PointIndex<()> = PointIndex::new(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.nearest(p(0.0, 0.0)).is_none());
    }
}

// ── OSRM decoding ─────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "osrm"))]
mod osrm {
    use std::time::Duration;

    use super::helpers::p;
    use crate::OsrmResolver;
    use crate::osrm::decode;

    #[test]
    fn swaps_geojson_lon_lat() {
        let body = r#"{"code":"Ok","routes":[
            {"geometry":{"type":"LineString","coordinates":[[78.0,30.0],[78.05,30.02]]}},
            {"geometry":{"type":"LineString","coordinates":[[1.0,2.0],[3.0,4.0]]}}
        ]}"#;
        assert_eq!(decode(body).unwrap(), [p(30.0, 78.0), p(30.02, 78.05)]);
    }

    #[test]
    fn no_route_bodies_decode_to_none() {
        assert!(decode(r#"{"code":"NoRoute","routes":[]}"#).is_none());
        assert!(decode(r#"{"code":"NoSegment","message":"Could not find a matching segment"}"#).is_none());
        assert!(decode(r#"{"routes":[{"geometry":{"coordinates":[]}}]}"#).is_none());
    }

    #[test]
    fn malformed_bodies_decode_to_none() {
        assert!(decode("").is_none());
        assert!(decode("<html>502 Bad Gateway</html>").is_none());
        assert!(decode(r#"{"routes":[{"geometry":{"coordinates":[[78.0]]}}]}"#).is_none());
        assert!(decode(r#"{"routes":"Ok"}"#).is_none());
        // Latitude 120 only makes sense if the pair was never swapped.
        assert!(decode(r#"{"routes":[{"geometry":{"coordinates":[[30.0,120.0]]}}]}"#).is_none());
    }

    #[test]
    fn route_url_is_lon_lat_joined() {
        let osrm = OsrmResolver::new("http://osrm.local:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            osrm.route_url(&[p(30.0, 78.0), p(30.5, 78.25)]),
            "http://osrm.local:5000/route/v1/driving/78,30;78.25,30.5"
        );
        let walking = osrm.with_profile("walking");
        assert_eq!(walking.route_url(&[p(1.5, -2.0)]), "http://osrm.local:5000/route/v1/walking/-2,1.5");
    }
}
