//! `flock-core`: foundational types for the `rust_flock` boids framework.
//!
//! This crate is a dependency of every other `flock-*` crate.  It has no
//! `flock-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`vec2`]        | `Vec2`, the planar `f64` vector used for positions and headings |
//! | [`time`]        | `Tick`, `SimConfig`                                   |
//! | [`params`]      | `FlockParams` and its validation                      |
//! | [`rng`]         | `SimRng` (seedable simulation RNG)                    |
//! | [`error`]       | `FlockError`, `FlockResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by the demo binaries' TOML loader.                |

pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod time;
pub mod vec2;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{FlockError, FlockResult};
pub use ids::AgentId;
pub use params::FlockParams;
pub use rng::SimRng;
pub use time::{SimConfig, Tick};
pub use vec2::Vec2;
