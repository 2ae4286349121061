//! Proximity graph representation and builder.
//!
//! # Data layout
//!
//! Nodes live in a `Vec<GraphNode>` indexed by [`NodeIndex`]; outgoing edges
//! live in a parallel `Vec<Vec<(NodeIndex, f64)>>`.  Graphs are tiny (tens of
//! nodes, one per live record) and rebuilt for every request, so a plain
//! adjacency list beats CSR here: no sort, no second pass.
//!
//! # Edge rule
//!
//! For every ordered pair `(i, j)`, `i != j`, with great-circle distance
//! `d < proximity_radius_km`:
//!
//! ```text
//! weight(i → j) = d * distance_weight_per_km
//!               + congestion(j) * congestion_weight
//!               + (block_penalty if blocked(j))
//! ```
//!
//! Coincident points (`d == 0`) still get an edge.  Edges are appended in
//! `(i, j)` index order, so the same node sequence always yields the same
//! graph.

use shield_core::{GeoPoint, Hazard, NodeIndex, RoutingConfig, TrafficPoint};

// ── GraphNode ─────────────────────────────────────────────────────────────────

/// What a graph node stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    /// Route origin supplied by the caller.
    Start,
    /// Fixed route destination.
    End,
    /// A live hazard that routes should skirt.
    Hazard,
    Traffic,
    Shelter,
    /// A hazard used as the *origin* of a shelter search.
    Disaster,
}

/// A typed point in a proximity graph.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphNode {
    pub kind:       NodeKind,
    pub point:      GeoPoint,
    /// Charged to every edge that enters this node.  0 ..= 10.
    pub congestion: f64,
    /// Adds `block_penalty` to every edge that enters this node.
    pub blocked:    bool,
}

impl GraphNode {
    /// A penalty-free node.
    pub fn plain(kind: NodeKind, point: GeoPoint) -> Self {
        Self { kind, point, congestion: 0.0, blocked: false }
    }

    pub fn start(point: GeoPoint) -> Self {
        Self::plain(NodeKind::Start, point)
    }

    pub fn end(point: GeoPoint) -> Self {
        Self::plain(NodeKind::End, point)
    }

    pub fn shelter(point: GeoPoint) -> Self {
        Self::plain(NodeKind::Shelter, point)
    }

    pub fn traffic(t: &TrafficPoint) -> Self {
        Self {
            kind:       NodeKind::Traffic,
            point:      t.location,
            congestion: t.congestion,
            blocked:    t.blocked,
        }
    }

    /// Hazards are always blocked and carry their severity as congestion,
    /// so a route passes through one only when nothing else connects.
    pub fn hazard(h: &Hazard) -> Self {
        Self {
            kind:       NodeKind::Hazard,
            point:      h.location,
            congestion: h.severity as f64,
            blocked:    true,
        }
    }

    /// A hazard acting as the origin of a shelter search.
    pub fn disaster(h: &Hazard) -> Self {
        Self::plain(NodeKind::Disaster, h.location)
    }
}

// ── Edge ──────────────────────────────────────────────────────────────────────

/// A directed, weighted edge.  `weight` is finite and `>= 0`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub from:   NodeIndex,
    pub to:     NodeIndex,
    pub weight: f64,
}

// ── ProximityGraph ────────────────────────────────────────────────────────────

/// Directed proximity graph.  Do not construct directly; use
/// [`ProximityGraphBuilder`].
#[derive(Clone, Debug)]
pub struct ProximityGraph {
    nodes:     Vec<GraphNode>,
    adjacency: Vec<Vec<(NodeIndex, f64)>>,
}

impl ProximityGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn node(&self, id: NodeIndex) -> &GraphNode {
        &self.nodes[id.index()]
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Outgoing `(neighbor, weight)` pairs of `id`, in insertion order.
    #[inline]
    pub fn neighbors(&self, id: NodeIndex) -> &[(NodeIndex, f64)] {
        &self.adjacency[id.index()]
    }

    pub fn out_degree(&self, id: NodeIndex) -> usize {
        self.adjacency[id.index()].len()
    }

    /// Weight of the edge `from → to`, if it exists.
    pub fn edge_weight(&self, from: NodeIndex, to: NodeIndex) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|(n, _)| *n == to)
            .map(|&(_, w)| w)
    }

    /// Every edge, grouped by source in index order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, out)| {
            out.iter().map(move |&(to, weight)| Edge {
                from: node_index(i),
                to,
                weight,
            })
        })
    }

    /// Indices of all nodes of the given kind, ascending.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.kind == kind)
            .map(|(i, _)| node_index(i))
    }
}

/// Every node enters through [`ProximityGraphBuilder::add_node`], which
/// checks the count, so positions below `nodes.len()` always fit.
fn node_index(i: usize) -> NodeIndex {
    NodeIndex::try_from(i).expect("graph node count exceeds u32::MAX")
}

// ── ProximityGraphBuilder ─────────────────────────────────────────────────────

/// Collect nodes, then call [`build`](Self::build) to connect them.
///
/// # Example
///
/// ```
/// use shield_core::{GeoPoint, RoutingConfig};
/// use shield_spatial::{GraphNode, ProximityGraphBuilder};
///
/// let mut b = ProximityGraphBuilder::new(&RoutingConfig::default());
/// b.add_node(GraphNode::start(GeoPoint::new(30.10, 78.10)));
/// b.add_node(GraphNode::end(GeoPoint::new(30.20, 78.20)));
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 2); // both directions
/// ```
pub struct ProximityGraphBuilder {
    radius_km:         f64,
    per_km:            f64,
    congestion_weight: f64,
    block_penalty:     f64,
    nodes:             Vec<GraphNode>,
}

impl ProximityGraphBuilder {
    pub fn new(config: &RoutingConfig) -> Self {
        Self {
            radius_km:         config.proximity_radius_km,
            per_km:            config.distance_weight_per_km,
            congestion_weight: config.congestion_weight,
            block_penalty:     config.block_penalty,
            nodes:             Vec::new(),
        }
    }

    pub fn with_capacity(config: &RoutingConfig, nodes: usize) -> Self {
        let mut b = Self::new(config);
        b.nodes.reserve(nodes);
        b
    }

    /// Append a node and return its index (sequential from 0).
    ///
    /// # Panics
    ///
    /// Panics if the graph already holds `u32::MAX + 1` nodes.
    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        let id = node_index(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Cost of entering `dest` over a straight line of `distance_km`.
    pub fn edge_weight(&self, distance_km: f64, dest: &GraphNode) -> f64 {
        let mut w = distance_km * self.per_km + dest.congestion * self.congestion_weight;
        if dest.blocked {
            w += self.block_penalty;
        }
        w
    }

    /// Connect every pair closer than the proximity radius.  O(n²).
    ///
    /// # Panics
    ///
    /// Panics if any computed weight is negative or non-finite.  Inputs are
    /// validated upstream, so this only fires on a programming error.
    pub fn build(self) -> ProximityGraph {
        let n = self.nodes.len();
        let mut adjacency: Vec<Vec<(NodeIndex, f64)>> = vec![Vec::new(); n];

        for (i, a) in self.nodes.iter().enumerate() {
            for (j, b) in self.nodes.iter().enumerate() {
                if i == j {
                    continue;
                }
                let d = a.point.haversine_km(b.point);
                if d < self.radius_km {
                    let w = self.edge_weight(d, b);
                    assert!(
                        w.is_finite() && w >= 0.0,
                        "edge {i}->{j} has invalid weight {w}"
                    );
                    adjacency[i].push((node_index(j), w));
                }
            }
        }

        ProximityGraph { nodes: self.nodes, adjacency }
    }
}
