//! Curvature-weighted Dijkstra routing across ordered waypoints.
//!
//! # Weight table
//!
//! The router precomputes one weight per edge at construction and keeps it
//! in a side table (`Vec<f64>` indexed by `EdgeId`), never writing into the
//! shared [`TrackGraph`].  The same graph can therefore be routed under
//! several [`SpeedProfile`]s concurrently without interference.
//!
//! # Turn lookahead
//!
//! The weight of edge `u → v` anticipates the turn immediately after it:
//! the turning angle at `v` toward `v`'s *first* successor.  At a genuine
//! multi-way branch only that first edge is consulted — a known limitation
//! of the heuristic, acceptable because competition track graphs are simple
//! chains and loops almost everywhere.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use tg_core::{EdgeId, NodeId, distance, turning_angle_deg};
use tg_graph::TrackGraph;

use crate::{RouteError, RouteResult};

// ── SpeedProfile ──────────────────────────────────────────────────────────────

/// Velocity model used to turn edge lengths into traversal costs.
///
/// The defaults are the competition vehicle's: 1 m/s flat out, 0.3 m/s in
/// the tightest corner, and no slow-down for turns of 10° or less.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedProfile {
    /// Speed on straight track, m/s.
    pub max_speed: f64,
    /// Floor the turn penalty cannot push the speed below, m/s.
    pub min_curve_speed: f64,
    /// Turns at or below this angle (degrees) keep `max_speed`.
    pub straight_angle_deg: f64,
}

impl Default for SpeedProfile {
    fn default() -> Self {
        Self {
            max_speed: 1.0,
            min_curve_speed: 0.3,
            straight_angle_deg: 10.0,
        }
    }
}

impl SpeedProfile {
    /// Estimated speed through a turn of `angle_deg` degrees.
    ///
    /// Straight-enough turns keep `max_speed`; beyond the threshold the
    /// speed falls linearly with the angle, clamped at `min_curve_speed`.
    pub fn speed_at(&self, angle_deg: f64) -> f64 {
        if angle_deg <= self.straight_angle_deg {
            return self.max_speed;
        }
        (self.max_speed * (1.0 - angle_deg / 100.0)).max(self.min_curve_speed)
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the stitched node sequence and its total
/// weight (seconds of estimated travel under the active [`SpeedProfile`]).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Nodes to drive through, in order.  Adjacent entries are connected by
    /// a graph edge; waypoints appear exactly once at segment junctions.
    pub nodes: Vec<NodeId>,
    /// Sum of edge weights along the route.
    pub total_weight: f64,
}

impl Route {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ── CurvatureWeightedRouter ───────────────────────────────────────────────────

/// Shortest-path search over curvature-derived edge weights.
///
/// Construct once per (graph, profile) pair; the weight table is immutable
/// afterwards, so a router can be shared across threads freely.
pub struct CurvatureWeightedRouter {
    profile: SpeedProfile,
    /// Derived edge weight, indexed by `EdgeId`.  Owned here, not by the
    /// graph.
    edge_weight: Vec<f64>,
}

impl CurvatureWeightedRouter {
    /// Precompute the weight table for `graph` under `profile`.
    pub fn new(graph: &TrackGraph, profile: SpeedProfile) -> Self {
        let mut edge_weight = Vec::with_capacity(graph.edge_count());

        for e in 0..graph.edge_count() {
            let from = graph.edge_from[e];
            let to = graph.edge_to[e];
            let p_from = graph.points[from.index()];
            let p_to = graph.points[to.index()];

            // Lookahead: the turn entered right after this edge.  A node
            // with no successor (route end) is treated as straight.
            let mut speed = profile.max_speed;
            if let Some(next) = graph.first_successor(to) {
                let p_next = graph.points[next.index()];
                speed = profile.speed_at(turning_angle_deg(p_from, p_to, p_next));
            }

            edge_weight.push(distance(p_from, p_to) / speed);
        }

        Self { profile, edge_weight }
    }

    pub fn profile(&self) -> &SpeedProfile {
        &self.profile
    }

    /// Weight assigned to `edge` at construction.
    #[inline]
    pub fn edge_weight(&self, edge: EdgeId) -> f64 {
        self.edge_weight[edge.index()]
    }

    /// Find the minimum-weight path visiting `waypoints` in order.
    ///
    /// Consecutive segments are stitched dropping the duplicated junction
    /// node.  Consecutive *equal* waypoints are accepted as zero-length
    /// segments.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidWaypoints`] — fewer than two waypoints.
    /// - [`RouteError::Graph`] — a waypoint id the graph does not contain.
    /// - [`RouteError::NoPath`] — some consecutive pair is unreachable; the
    ///   whole route is aborted, never returned partially.
    pub fn route(&self, graph: &TrackGraph, waypoints: &[NodeId]) -> RouteResult<Route> {
        if waypoints.len() < 2 {
            return Err(RouteError::InvalidWaypoints(waypoints.len()));
        }
        for &w in waypoints {
            graph.point(w)?;
        }

        let mut nodes: Vec<NodeId> = Vec::new();
        let mut total_weight = 0.0;

        for (i, pair) in waypoints.windows(2).enumerate() {
            let (segment, weight) = self.shortest_path(graph, pair[0], pair[1])?;
            total_weight += weight;
            if i == 0 {
                nodes.extend(segment);
            } else {
                // The segment starts where the previous one ended.
                nodes.extend(segment.into_iter().skip(1));
            }
        }

        Ok(Route { nodes, total_weight })
    }

    // ── Dijkstra internals ────────────────────────────────────────────────

    /// Single-pair shortest path; node ids must be valid for `graph`.
    fn shortest_path(
        &self,
        graph: &TrackGraph,
        from: NodeId,
        to: NodeId,
    ) -> RouteResult<(Vec<NodeId>, f64)> {
        if from == to {
            return Ok((vec![from], 0.0));
        }

        let n = graph.node_count();
        // dist[v] = best known cost to reach v.
        let mut dist = vec![f64::INFINITY; n];
        // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached nodes.
        let mut prev_edge = vec![EdgeId::INVALID; n];

        dist[from.index()] = 0.0;

        // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as
        // min-heap.  Secondary key NodeId ensures deterministic tie-breaking.
        let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, NodeId)>> = BinaryHeap::new();
        heap.push(Reverse((OrderedFloat(0.0), from)));

        while let Some(Reverse((cost, node))) = heap.pop() {
            let cost = cost.into_inner();
            if node == to {
                return Ok((reconstruct(graph, &prev_edge, to), cost));
            }

            // Skip stale heap entries.
            if cost > dist[node.index()] {
                continue;
            }

            for edge in graph.out_edges(node) {
                let neighbor = graph.edge_to[edge.index()];
                let new_cost = cost + self.edge_weight[edge.index()];

                if new_cost < dist[neighbor.index()] {
                    dist[neighbor.index()] = new_cost;
                    prev_edge[neighbor.index()] = edge;
                    heap.push(Reverse((OrderedFloat(new_cost), neighbor)));
                }
            }
        }

        Err(RouteError::NoPath { from, to })
    }
}

/// Trace `prev_edge` links back from `to` and return the node sequence in
/// driving order.
fn reconstruct(graph: &TrackGraph, prev_edge: &[EdgeId], to: NodeId) -> Vec<NodeId> {
    let mut nodes = vec![to];
    let mut cur = to;
    loop {
        let e = prev_edge[cur.index()];
        if e == EdgeId::INVALID {
            break;
        }
        cur = graph.edge_from[e.index()];
        nodes.push(cur);
    }
    nodes.reverse();
    nodes
}
