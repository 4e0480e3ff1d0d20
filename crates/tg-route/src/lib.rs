//! `tg-route` — curvature-aware waypoint routing.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`router`] | `SpeedProfile`, `CurvatureWeightedRouter`, `Route`         |
//! | [`error`]  | `RouteError`, `RouteResult<T>`                             |
//!
//! # Weight model
//!
//! Each edge costs `distance / speed`, where the speed drops below the
//! straight-line maximum in proportion to the turning angle immediately
//! after the edge (down to a configured floor).  Dijkstra over these
//! weights prefers smoother routes even when they are marginally longer.

pub mod error;
pub mod router;


pub use error::{RouteError, RouteResult};
pub use router::{CurvatureWeightedRouter, Route, SpeedProfile};
