//! `tg-core` — foundational types for the track-geometry workspace.
//!
//! This crate is a dependency of every other `tg-*` crate.  It intentionally
//! has no `tg-*` dependencies and no required external ones (only optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                                  |
//! |----------|-----------------------------------------------------------|
//! | [`ids`]  | `NodeId`, `EdgeId`                                        |
//! | [`geom`] | `Point2`, distance, turning angle, circumradius, Ackermann |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod geom;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use geom::{Point2, ackermann_angle_deg, circumradius, distance, turning_angle_deg};
pub use ids::{EdgeId, NodeId};
