//! Unit tests for tg-graph.
//!
//! All tests use hand-built graphs; no map files are involved.

#[cfg(test)]
mod helpers {
    use tg_core::{NodeId, Point2};
    use crate::{TrackGraph, TrackGraphBuilder};

    /// A directed cycle of `n` nodes spaced 1 m apart on the x axis:
    /// 0 → 1 → … → (n-1) → 0.
    pub fn cycle(n: usize) -> (TrackGraph, Vec<NodeId>) {
        let mut b = TrackGraphBuilder::new();
        let ids: Vec<NodeId> = (0..n)
            .map(|i| b.add_node(Point2::new(i as f64, 0.0)))
            .collect();
        for i in 0..n {
            b.add_edge(ids[i], ids[(i + 1) % n], false).unwrap();
        }
        (b.build(), ids)
    }

    /// An open chain 0 → 1 → … → (n-1), 1 m spacing.
    pub fn chain(n: usize) -> (TrackGraph, Vec<NodeId>) {
        let mut b = TrackGraphBuilder::new();
        let ids: Vec<NodeId> = (0..n)
            .map(|i| b.add_node(Point2::new(i as f64, 0.0)))
            .collect();
        for i in 0..n - 1 {
            b.add_edge(ids[i], ids[i + 1], false).unwrap();
        }
        (b.build(), ids)
    }
}

// ── Builder & CSR structure ───────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use tg_core::{NodeId, Point2};
    use crate::{GraphError, TrackGraph, TrackGraphBuilder};

    #[test]
    fn empty_build() {
        let g = TrackGraph::empty();
        assert_eq!(g.node_count(), 0);
        assert_eq!(g.edge_count(), 0);
        assert!(g.is_empty());
    }

    #[test]
    fn edge_to_missing_node_rejected() {
        let mut b = TrackGraphBuilder::new();
        let a = b.add_node(Point2::new(0.0, 0.0));
        let ghost = NodeId(7);
        assert!(matches!(
            b.add_edge(a, ghost, false),
            Err(GraphError::UnknownNode(id)) if id == ghost
        ));
        assert!(matches!(
            b.add_edge(ghost, a, false),
            Err(GraphError::UnknownNode(_))
        ));
        assert_eq!(b.edge_count(), 0);
    }

    #[test]
    fn csr_out_edges() {
        let (g, ids) = super::helpers::cycle(4);
        for &id in &ids {
            assert_eq!(g.out_degree(id), 1);
        }
        // Each node's single successor is the next node in the cycle.
        let succ: Vec<_> = g.successors(ids[1]).unwrap().collect();
        assert_eq!(succ, vec![ids[2]]);
    }

    #[test]
    fn insertion_order_preserved_within_node() {
        let mut b = TrackGraphBuilder::new();
        let a = b.add_node(Point2::new(0.0, 0.0));
        let x = b.add_node(Point2::new(1.0, 0.0));
        let y = b.add_node(Point2::new(0.0, 1.0));
        let z = b.add_node(Point2::new(1.0, 1.0));
        // Interleave with an unrelated edge so the stable sort has work to do.
        b.add_edge(a, x, false).unwrap();
        b.add_edge(x, z, false).unwrap();
        b.add_edge(a, y, false).unwrap();
        b.add_edge(a, z, false).unwrap();
        let g = b.build();

        let succ: Vec<_> = g.successors(a).unwrap().collect();
        assert_eq!(succ, vec![x, y, z]);
        assert_eq!(g.first_successor(a), Some(x));
        assert_eq!(g.last_successor(a), Some(z));
    }

    #[test]
    fn dotted_flag_carried() {
        let mut b = TrackGraphBuilder::new();
        let a = b.add_node(Point2::new(0.0, 0.0));
        let c = b.add_node(Point2::new(1.0, 0.0));
        b.add_edge(a, c, true).unwrap();
        b.add_edge(c, a, false).unwrap();
        let g = b.build();

        let e_ac = g.out_edges(a).next().unwrap();
        let e_ca = g.out_edges(c).next().unwrap();
        assert!(g.edge_dotted[e_ac.index()]);
        assert!(!g.edge_dotted[e_ca.index()]);
    }

    #[test]
    fn unknown_node_lookups_fail() {
        let (g, _) = super::helpers::chain(3);
        let ghost = NodeId(99);
        assert!(matches!(g.point(ghost), Err(GraphError::UnknownNode(_))));
        assert!(g.successors(ghost).is_err());
        assert!(!g.contains(ghost));
    }

    #[test]
    fn point_roundtrip() {
        let mut b = TrackGraphBuilder::new();
        let a = b.add_node(Point2::new(2.5, -1.0));
        let g = b.build();
        assert_eq!(g.point(a).unwrap(), Point2::new(2.5, -1.0));
    }
}

// ── Driving-order reconstruction ──────────────────────────────────────────────

#[cfg(test)]
mod order {
    use tg_core::Point2;
    use crate::{TrackGraph, TrackGraphBuilder, driving_order};

    #[test]
    fn empty_graph_yields_empty_order() {
        assert!(driving_order(&TrackGraph::empty()).is_empty());
    }

    #[test]
    fn edgeless_graph_yields_empty_order() {
        let mut b = TrackGraphBuilder::new();
        b.add_node(Point2::new(0.0, 0.0));
        b.add_node(Point2::new(1.0, 0.0));
        assert!(driving_order(&b.build()).is_empty());
    }

    #[test]
    fn open_chain_starts_at_source() {
        let (g, ids) = super::helpers::chain(5);
        assert_eq!(driving_order(&g), ids);
    }

    #[test]
    fn closed_cycle_repeats_start() {
        let n = 6;
        let (g, _) = super::helpers::cycle(n);
        let order = driving_order(&g);

        // All n nodes once, plus the start repeated to close the loop.
        assert_eq!(order.len(), n + 1);
        assert_eq!(order.first(), order.last());
        let mut seen: Vec<_> = order[..n].to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), n);
    }

    #[test]
    fn branch_follows_last_inserted_edge() {
        let mut b = TrackGraphBuilder::new();
        let a = b.add_node(Point2::new(0.0, 0.0));
        let short = b.add_node(Point2::new(1.0, 1.0));
        let long = b.add_node(Point2::new(1.0, 0.0));
        b.add_edge(a, short, false).unwrap();
        b.add_edge(a, long, false).unwrap(); // inserted later → wins
        let g = b.build();

        assert_eq!(driving_order(&g), vec![a, long]);
    }

    #[test]
    fn malformed_cycle_stops_at_revisit() {
        // a → b → c → b: the walk must stop when it would revisit b.
        let mut bld = TrackGraphBuilder::new();
        let a = bld.add_node(Point2::new(0.0, 0.0));
        let b = bld.add_node(Point2::new(1.0, 0.0));
        let c = bld.add_node(Point2::new(2.0, 0.0));
        bld.add_edge(a, b, false).unwrap();
        bld.add_edge(b, c, false).unwrap();
        bld.add_edge(c, b, false).unwrap();
        let g = bld.build();

        assert_eq!(driving_order(&g), vec![a, b, c]);
    }

    #[test]
    fn self_loop_closes_immediately() {
        let mut b = TrackGraphBuilder::new();
        let a = b.add_node(Point2::new(0.0, 0.0));
        b.add_edge(a, a, false).unwrap();
        let g = b.build();

        assert_eq!(driving_order(&g), vec![a, a]);
    }

    #[test]
    fn disjoint_chains_walk_one_component() {
        // Two chains: 0→1 and 2→3.  The walk starts at the lowest-id source
        // and covers only its own component.
        let mut b = TrackGraphBuilder::new();
        let n0 = b.add_node(Point2::new(0.0, 0.0));
        let n1 = b.add_node(Point2::new(1.0, 0.0));
        let n2 = b.add_node(Point2::new(0.0, 5.0));
        let n3 = b.add_node(Point2::new(1.0, 5.0));
        b.add_edge(n0, n1, false).unwrap();
        b.add_edge(n2, n3, false).unwrap();
        let g = b.build();

        assert_eq!(driving_order(&g), vec![n0, n1]);
    }
}
