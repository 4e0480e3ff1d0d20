//! track-report — end-to-end demo for the track-geometry workspace.
//!
//! Builds a small synthetic competition loop in memory (a real tool would
//! load a converted map file instead), then runs the full pipeline:
//! driving-order reconstruction, curvature-weighted waypoint routing, and
//! the steering-feasibility scan, printing the authoring report.
//!
//! The loop includes one deliberately tight chicane so the report has
//! something to flag.

use anyhow::Result;

use tg_core::{NodeId, Point2};
use tg_graph::{TrackGraph, TrackGraphBuilder, driving_order};
use tg_route::{CurvatureWeightedRouter, SpeedProfile};
use tg_safety::{VehicleLimits, scan_track};

/// Closed loop, roughly 5 m × 3 m, driven counter-clockwise.  The three
/// nodes around (2.8, 3.0) form the tight chicane.
const TRACK: &[(f64, f64)] = &[
    (0.0, 0.0),
    (1.0, 0.0),
    (2.0, 0.0),
    (3.0, 0.0),
    (4.0, 0.0),
    (4.8, 0.4),
    (5.0, 1.2),
    (5.0, 2.0),
    (4.8, 2.8),
    (4.0, 3.0),
    (3.0, 3.0),
    (2.8, 3.0),
    (2.8, 3.2),
    (2.0, 3.2),
    (1.0, 3.2),
    (0.2, 2.8),
    (0.0, 2.0),
    (0.0, 1.0),
];

fn build_track() -> Result<(TrackGraph, Vec<NodeId>)> {
    let mut b = TrackGraphBuilder::new();
    let ids: Vec<NodeId> = TRACK
        .iter()
        .map(|&(x, y)| b.add_node(Point2::new(x, y)))
        .collect();

    // Dotted pit-lane shortcut across the loop.  Inserted before the loop
    // edges so the driving-order walk (last edge wins) stays on the loop.
    b.add_edge(ids[4], ids[9], true)?;

    for i in 0..ids.len() {
        b.add_edge(ids[i], ids[(i + 1) % ids.len()], false)?;
    }
    Ok((b.build(), ids))
}

fn main() -> Result<()> {
    let (graph, ids) = build_track()?;
    println!(
        "track: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let order = driving_order(&graph);
    let closed = order.len() >= 2 && order.first() == order.last();
    println!(
        "driving order: {} entries ({})",
        order.len(),
        if closed { "closed loop" } else { "open chain" }
    );

    // Route across three waypoints on the loop.
    let waypoints = [ids[0], ids[7], ids[13]];
    let router = CurvatureWeightedRouter::new(&graph, SpeedProfile::default());
    let route = router.route(&graph, &waypoints)?;
    println!(
        "route {} -> {} -> {}: {} nodes, estimated {:.1} s",
        waypoints[0].0,
        waypoints[1].0,
        waypoints[2].0,
        route.len(),
        route.total_weight,
    );

    // Steering-feasibility scan over the whole loop.
    let limits = VehicleLimits::default();
    println!(
        "\nsteering check (wheelbase {} m, max {}°):",
        limits.wheelbase_m, limits.max_steering_deg
    );
    let violations = scan_track(&graph, &limits)?;
    if violations.is_empty() {
        println!("  no violations — every turn is drivable");
    } else {
        println!("  {} violation(s):", violations.len());
        println!("  before -> center -> after | steering | radius");
        for v in &violations {
            println!("  {v}");
        }
        println!("  fix: move the center nodes apart or widen the curve");
    }
    Ok(())
}
