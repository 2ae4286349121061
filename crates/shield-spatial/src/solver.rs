//! Single-source Dijkstra over a [`ProximityGraph`].
//!
//! Unlike a point-to-point search this always settles the whole reachable
//! graph, because the nearest-shelter query scans every shelter node after a
//! single run instead of solving once per shelter.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use shield_core::NodeIndex;

use crate::graph::ProximityGraph;

// ── Heap entry ────────────────────────────────────────────────────────────────

/// `(cost, node)` ordered by cost, then by node index.  The secondary key
/// makes pop order reproducible when tentative costs tie.
#[derive(Copy, Clone, Debug)]
struct Frontier {
    cost: f64,
    node: NodeIndex,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.node.cmp(&other.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// Distances and predecessor links from one source.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: NodeIndex,
    /// `dist[v]` = optimal cost to reach `v`; `f64::INFINITY` if unreached.
    dist:   Vec<f64>,
    /// `prev[v]` = node `v` was reached from; `None` for the source and for
    /// unreached nodes.
    prev:   Vec<Option<NodeIndex>>,
}

impl ShortestPaths {
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    #[inline]
    pub fn distance(&self, target: NodeIndex) -> f64 {
        self.dist[target.index()]
    }

    #[inline]
    pub fn is_reachable(&self, target: NodeIndex) -> bool {
        self.dist[target.index()].is_finite()
    }

    pub fn predecessor(&self, node: NodeIndex) -> Option<NodeIndex> {
        self.prev[node.index()]
    }

    /// Node sequence `source ..= target`.
    ///
    /// Returns an empty `Vec` if `target` is unreachable; never a partial
    /// path.  `path_to(source)` is `[source]`.
    pub fn path_to(&self, target: NodeIndex) -> Vec<NodeIndex> {
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.source {
            match self.prev[cur.index()] {
                Some(p) => {
                    path.push(p);
                    cur = p;
                }
                None => return Vec::new(),
            }
        }
        path.reverse();
        path
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Settle every node reachable from `source`.
///
/// # Panics
///
/// Panics if `source` is out of bounds, or (debug builds) if an edge weight
/// is negative.
pub fn shortest_paths(graph: &ProximityGraph, source: NodeIndex) -> ShortestPaths {
    let n = graph.node_count();
    assert!(source.index() < n, "source {source} outside graph of {n} nodes");

    let mut dist = vec![f64::INFINITY; n];
    let mut prev: Vec<Option<NodeIndex>> = vec![None; n];

    dist[source.index()] = 0.0;

    let mut heap: BinaryHeap<Reverse<Frontier>> = BinaryHeap::with_capacity(n);
    heap.push(Reverse(Frontier { cost: 0.0, node: source }));

    while let Some(Reverse(Frontier { cost, node })) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for &(neighbor, weight) in graph.neighbors(node) {
            debug_assert!(weight >= 0.0, "negative edge weight {weight}");
            let next = cost + weight;
            if next < dist[neighbor.index()] {
                dist[neighbor.index()] = next;
                prev[neighbor.index()] = Some(node);
                heap.push(Reverse(Frontier { cost: next, node: neighbor }));
            }
        }
    }

    ShortestPaths { source, dist, prev }
}
