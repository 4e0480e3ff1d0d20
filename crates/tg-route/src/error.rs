//! Routing-subsystem error type.

use thiserror::Error;

use tg_core::NodeId;
use tg_graph::GraphError;

/// Errors produced by `tg-route`.
///
/// All variants are map-authoring defects to fix at the data layer, not
/// runtime conditions to recover from.
#[derive(Debug, Error)]
pub enum RouteError {
    /// A waypoint route needs at least a start and an end.
    #[error("waypoint list needs at least 2 entries, got {0}")]
    InvalidWaypoints(usize),

    /// No path between two consecutive waypoints.  The whole multi-segment
    /// route is aborted — a partial route is unsafe to drive.
    #[error("no path from waypoint {from} to waypoint {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type RouteResult<T> = Result<T, RouteError>;
