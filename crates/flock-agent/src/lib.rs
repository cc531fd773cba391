//! `flock-agent`: Structure-of-Arrays boid storage for `rust_flock`.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`store`]       | `AgentStore` (SoA headings), `AgentSnapshot`              |
//! | [`builder`]     | `AgentStoreBuilder`, `random_heading`                     |
//!
//! Positions are not stored here: the toroidal space in `flock-spatial` owns
//! them, so that every neighbor query reads one authoritative copy.
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `serde`    | Derives `Serialize`/`Deserialize` on `AgentSnapshot`.   |

pub mod builder;
pub mod store;


pub use builder::{AgentStoreBuilder, random_heading};
pub use store::{AgentSnapshot, AgentStore};
