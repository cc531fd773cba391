//! `flock-spatial`: toroidal continuous space for the rust_flock framework.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`torus`]   | `ToroidalSpace`, `wrap_axis`, `min_image`                |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                       |
//!
//! # Topology
//!
//! Both axes wrap: leaving the right edge re-enters on the left, leaving the
//! top re-enters at the bottom.  Stored positions always satisfy
//! `0 <= x < width` and `0 <= y < height`.  Every displacement the space
//! reports follows the minimum-image convention, so two boids on opposite
//! edges are close neighbors, not far-apart ones.
//!
//! # Consistency model
//!
//! There is no double-buffering.  `move_agent` overwrites the stored
//! position, and the very next `neighbors_within` call observes it.  The
//! per-tick activation order in `flock-schedule` is what makes this fair.

pub mod error;
pub mod torus;


pub use error::{SpatialError, SpatialResult};
pub use torus::{SpaceNeighbor, ToroidalSpace, min_image, wrap_axis};
