//! Track-graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `NodeId n`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_to[ node_out_start[n] .. node_out_start[n+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_dotted`) are sorted by
//! source node and indexed by `EdgeId`.  The sort is **stable**, so within
//! one node's slice the edges keep their insertion order — both the
//! driving-order walk (last-inserted successor wins at a branch) and the
//! router's turn lookahead (first successor) depend on that.
//!
//! The graph is built once from the map loader's output and read-only
//! afterwards; derived data such as routing weights lives in side tables
//! owned by the consumers, never in the graph itself.

use tg_core::{EdgeId, NodeId, Point2};

use crate::{GraphError, GraphResult};

// ── TrackGraph ────────────────────────────────────────────────────────────────

/// Directed track graph in CSR format.
///
/// All fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`TrackGraphBuilder`].
pub struct TrackGraph {
    /// Metric position of each node.  Indexed by `NodeId`.
    pub points: Vec<Point2>,

    /// CSR row pointer.  Outgoing edges of node `n` are at EdgeIds
    /// `node_out_start[n] .. node_out_start[n+1]`.
    /// Length = `node_count + 1`.
    pub node_out_start: Vec<u32>,

    /// Source node of each edge.  Redundant with CSR but required for
    /// efficient route reconstruction (trace `prev_edge` back to source).
    pub edge_from: Vec<NodeId>,

    /// Destination node of each edge.
    pub edge_to: Vec<NodeId>,

    /// "Dotted" flag per edge: marks a virtual/non-physical connection
    /// (e.g. a permitted shortcut).  Carried as data; routing and
    /// validation math treat dotted edges like any other.
    pub edge_dotted: Vec<bool>,
}

impl TrackGraph {
    /// Construct an empty graph with no nodes or edges.
    pub fn empty() -> Self {
        TrackGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.points.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` if `id` names a node of this graph.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.points.len()
    }

    // ── Fallible lookups (the loader/caller boundary) ─────────────────────

    /// Metric position of `id`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if `id` is not a node of this graph.
    pub fn point(&self, id: NodeId) -> GraphResult<Point2> {
        self.points
            .get(id.index())
            .copied()
            .ok_or(GraphError::UnknownNode(id))
    }

    /// Iterator over the successor nodes of `id`, in edge-insertion order.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if `id` is not a node of this graph.
    pub fn successors(&self, id: NodeId) -> GraphResult<impl Iterator<Item = NodeId> + '_> {
        if !self.contains(id) {
            return Err(GraphError::UnknownNode(id));
        }
        Ok(self.out_edges(id).map(|e| self.edge_to[e.index()]))
    }

    // ── Graph traversal (ids must be valid) ───────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `node`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `node` (number of outgoing edges).
    #[inline]
    pub fn out_degree(&self, node: NodeId) -> usize {
        let start = self.node_out_start[node.index()] as usize;
        let end   = self.node_out_start[node.index() + 1] as usize;
        end - start
    }

    /// First-inserted successor of `node`, if any.  The router's turn
    /// lookahead consults this edge only, even at a multi-way branch.
    #[inline]
    pub fn first_successor(&self, node: NodeId) -> Option<NodeId> {
        self.out_edges(node).next().map(|e| self.edge_to[e.index()])
    }

    /// Last-inserted successor of `node`, if any.  The driving-order walk
    /// follows this edge when a node has several outgoing edges.
    #[inline]
    pub fn last_successor(&self, node: NodeId) -> Option<NodeId> {
        self.out_edges(node).last().map(|e| self.edge_to[e.index()])
    }
}

// ── TrackGraphBuilder ─────────────────────────────────────────────────────────

/// Construct a [`TrackGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts nodes and directed edges in any order; edges are
/// validated against the nodes added so far.  `build()` stable-sorts edges
/// by source node and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use tg_core::Point2;
/// use tg_graph::TrackGraphBuilder;
///
/// let mut b = TrackGraphBuilder::new();
/// let a = b.add_node(Point2::new(0.0, 0.0));
/// let c = b.add_node(Point2::new(1.0, 0.0));
/// b.add_edge(a, c, false).unwrap();
/// let g = b.build();
/// assert_eq!(g.node_count(), 2);
/// assert_eq!(g.edge_count(), 1); // directed: no return edge
/// ```
pub struct TrackGraphBuilder {
    points:    Vec<Point2>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from:   NodeId,
    to:     NodeId,
    dotted: bool,
}

impl TrackGraphBuilder {
    pub fn new() -> Self {
        Self { points: Vec::new(), raw_edges: Vec::new() }
    }

    /// Pre-allocate for the expected number of nodes and edges to reduce
    /// reallocations when bulk-loading a converted map.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            points:    Vec::with_capacity(nodes),
            raw_edges: Vec::with_capacity(edges),
        }
    }

    /// Add a track node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self, point: Point2) -> NodeId {
        let id = NodeId(self.points.len() as u32);
        self.points.push(point);
        id
    }

    /// Add a **directed** edge from `from` to `to`.
    ///
    /// `dotted` flags a virtual/non-physical connection.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if either endpoint has not been added.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, dotted: bool) -> GraphResult<()> {
        for id in [from, to] {
            if id.index() >= self.points.len() {
                return Err(GraphError::UnknownNode(id));
            }
        }
        self.raw_edges.push(RawEdge { from, to, dotted });
        Ok(())
    }

    pub fn node_count(&self) -> usize { self.points.len() }
    pub fn edge_count(&self) -> usize { self.raw_edges.len() }

    /// Consume the builder and produce a [`TrackGraph`].
    ///
    /// Time complexity: O(E log E) for the edge sort, where E = edges.
    pub fn build(self) -> TrackGraph {
        let node_count = self.points.len();
        let edge_count = self.raw_edges.len();

        // Stable sort by source node: CSR grouping without disturbing the
        // per-node insertion order.
        let mut raw = self.raw_edges;
        raw.sort_by_key(|e| e.from.0);

        let edge_from:   Vec<NodeId> = raw.iter().map(|e| e.from).collect();
        let edge_to:     Vec<NodeId> = raw.iter().map(|e| e.to).collect();
        let edge_dotted: Vec<bool>   = raw.iter().map(|e| e.dotted).collect();

        // Build CSR row pointer (node_out_start).
        let mut node_out_start = vec![0u32; node_count + 1];
        for e in &raw {
            node_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_out_start[i] += node_out_start[i - 1];
        }
        debug_assert_eq!(node_out_start[node_count] as usize, edge_count);

        TrackGraph {
            points: self.points,
            node_out_start,
            edge_from,
            edge_to,
            edge_dotted,
        }
    }
}

impl Default for TrackGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
