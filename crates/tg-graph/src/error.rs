//! Graph-subsystem error type.

use thiserror::Error;

use tg_core::NodeId;

/// Errors produced by `tg-graph`.
///
/// An `UnknownNode` always indicates malformed upstream (map-loader) data;
/// callers should surface it, never retry it.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("node {0} not found in track graph")]
    UnknownNode(NodeId),
}

pub type GraphResult<T> = Result<T, GraphError>;
