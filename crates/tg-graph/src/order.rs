//! Driving-order reconstruction.
//!
//! Map files store nodes in whatever order the editor saved them; the
//! driving order is encoded only in the edge arrows.  This module rebuilds
//! a linear sequence by walking successor links from a start node.
//!
//! The walk is deliberately tolerant: malformed graphs are normal while a
//! map is being authored, so a runaway or a dead end returns the partial
//! sequence instead of an error.

use tg_core::NodeId;

use crate::TrackGraph;

/// Extra steps allowed past `node_count` before the walk gives up.
const STEP_SLACK: usize = 10;

/// Reconstruct a linear driving sequence from the graph's adjacency links.
///
/// Start node: the lowest-id node with outgoing edges that is never an edge
/// target (in-degree 0).  A closed loop has no such node; then the lowest-id
/// node with outgoing edges is used.  A graph with no edges yields an empty
/// sequence.
///
/// The walk appends the current node and advances to its **last-inserted**
/// successor.  It stops at a node with no outgoing edge, stops and appends
/// the start once more when the walk returns to it (explicitly closed loop),
/// and stops without appending when it would revisit any other node
/// (malformed cycle).  A hard cap of `node_count + 10` appended nodes guards
/// against runaway traversal; hitting it returns the partial sequence.
///
/// At a branch the last-inserted edge wins — callers needing deterministic
/// multi-way branching must pre-filter the graph to a simple path or cycle.
pub fn driving_order(graph: &TrackGraph) -> Vec<NodeId> {
    let Some(start) = find_start(graph) else {
        return Vec::new();
    };

    let cap = graph.node_count() + STEP_SLACK;
    let mut order = Vec::with_capacity(graph.node_count() + 1);
    let mut visited = vec![false; graph.node_count()];

    let mut current = start;
    while order.len() < cap {
        order.push(current);
        visited[current.index()] = true;

        match graph.last_successor(current) {
            None => break,
            Some(next) if next == start => {
                // Closed loop: repeat the start to close it explicitly.
                order.push(start);
                break;
            }
            Some(next) if visited[next.index()] => break,
            Some(next) => current = next,
        }
    }
    order
}

/// Pick the walk's start node, or `None` if no node has an outgoing edge.
fn find_start(graph: &TrackGraph) -> Option<NodeId> {
    let mut is_target = vec![false; graph.node_count()];
    for to in &graph.edge_to {
        is_target[to.index()] = true;
    }

    let has_out = |i: usize| graph.out_degree(NodeId(i as u32)) > 0;

    // Prefer a true source (never pointed at); a closed loop has none.
    (0..graph.node_count())
        .find(|&i| has_out(i) && !is_target[i])
        .or_else(|| (0..graph.node_count()).find(|&i| has_out(i)))
        .map(|i| NodeId(i as u32))
}
