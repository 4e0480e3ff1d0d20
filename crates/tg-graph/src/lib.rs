//! `tg-graph` — the in-memory track graph and driving-order reconstruction.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                |
//! |-----------|---------------------------------------------------------|
//! | [`graph`] | `TrackGraph` (CSR adjacency), `TrackGraphBuilder`       |
//! | [`order`] | `driving_order` — linear sequence from adjacency links  |
//! | [`error`] | `GraphError`, `GraphResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                   |
//! |---------|----------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.       |

pub mod error;
pub mod graph;
pub mod order;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{TrackGraph, TrackGraphBuilder};
pub use order::driving_order;
