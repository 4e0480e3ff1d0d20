//! `tg-safety` — steering-feasibility validation.
//!
//! Slides a three-node window over an ordered driving path, computes the
//! local turning radius (circumcircle through the triple) and the Ackermann
//! steering angle a vehicle of the configured wheelbase would need, and
//! reports every turn that exceeds the vehicle's maximum steering angle.
//!
//! The output is a list of [`Violation`]s for a human to fix in the map
//! editor — pull the flagged center nodes apart or widen the curve.
//!
//! # Crate layout
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | [`validate`] | `VehicleLimits`, `Violation`, `scan_path`, `scan_track` |

pub mod validate;


pub use validate::{VehicleLimits, Violation, scan_path, scan_track};
