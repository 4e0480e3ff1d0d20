//! Three-node window scan for over-limit steering angles.

use tg_core::{NodeId, ackermann_angle_deg, circumradius};
use tg_graph::{GraphResult, TrackGraph, driving_order};

// ── VehicleLimits ─────────────────────────────────────────────────────────────

/// Kinematic limits of the vehicle the track must accommodate.
///
/// The defaults are the competition vehicle's measured wheelbase and its
/// steering servo's mechanical limit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VehicleLimits {
    /// Distance between front and rear axle, meters.  Must be > 0.
    pub wheelbase_m: f64,
    /// Maximum front-wheel steering angle, degrees (typically in (0, 90)).
    pub max_steering_deg: f64,
}

impl Default for VehicleLimits {
    fn default() -> Self {
        Self {
            wheelbase_m: 0.26,
            max_steering_deg: 25.0,
        }
    }
}

// ── Violation ─────────────────────────────────────────────────────────────────

/// One turn the vehicle cannot take: the three-node window, the turning
/// radius it implies, and the steering angle that radius demands.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Violation {
    pub before: NodeId,
    /// The corner node — the one to move in the map editor.
    pub center: NodeId,
    pub after: NodeId,
    /// Local turning radius, meters.  Finite here by construction: an
    /// infinite (collinear) radius demands 0° steering and is never flagged.
    pub radius_m: f64,
    /// Required Ackermann steering angle, degrees.
    pub steering_deg: f64,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} -> {} | {:.2}° | {:.3} m",
            self.before.0, self.center.0, self.after.0, self.steering_deg, self.radius_m
        )
    }
}

// ── Scans ─────────────────────────────────────────────────────────────────────

/// Scan an ordered driving path for turns exceeding the steering limit.
///
/// For every interior index `i`, the circumcircle through
/// `(path[i-1], path[i], path[i+1])` gives the local turning radius, and
/// `atan(wheelbase / radius)` the steering angle; a [`Violation`] is
/// recorded when that angle strictly exceeds `limits.max_steering_deg`.
///
/// Paths shorter than 3 nodes have no interior point and yield an empty
/// list.  The path is never reordered — callers supply driving order
/// (router output or [`driving_order`]).  Pure and deterministic.
///
/// # Errors
///
/// [`GraphError::UnknownNode`](tg_graph::GraphError) if the path names a
/// node the graph does not contain.
pub fn scan_path(
    graph: &TrackGraph,
    path: &[NodeId],
    limits: &VehicleLimits,
) -> GraphResult<Vec<Violation>> {
    let mut violations = Vec::new();
    if path.len() < 3 {
        return Ok(violations);
    }

    for window in path.windows(3) {
        let (before, center, after) = (window[0], window[1], window[2]);
        let radius_m = circumradius(
            graph.point(before)?,
            graph.point(center)?,
            graph.point(after)?,
        );
        let steering_deg = ackermann_angle_deg(radius_m, limits.wheelbase_m);

        if steering_deg > limits.max_steering_deg {
            violations.push(Violation {
                before,
                center,
                after,
                radius_m,
                steering_deg,
            });
        }
    }
    Ok(violations)
}

/// Scan the whole track in driving order.
///
/// Reconstructs the linear sequence via [`driving_order`] and runs
/// [`scan_path`] over it — the end-to-end check a map author wants after
/// every edit.
pub fn scan_track(graph: &TrackGraph, limits: &VehicleLimits) -> GraphResult<Vec<Violation>> {
    let order = driving_order(graph);
    scan_path(graph, &order, limits)
}
