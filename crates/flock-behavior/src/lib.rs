//! `flock-behavior`: boid behavior model trait and steering rules.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`context`]  | `AgentView`, `Neighbor`, `NextState`                            |
//! | [`model`]    | `BehaviorModel` trait                                           |
//! | [`reynolds`] | `ReynoldsFlocking`: cohesion, separation, alignment             |
//! | [`inertial`] | `InertialBehavior`: headings never change                       |
//!
//! # Design notes
//!
//! A behavior model is a pure function from "me plus my neighbors" to a new
//! heading.  It never touches the space: the caller (`flock-sim`) runs the
//! neighbor query, hands the results in, and performs the move.  New agent
//! kinds are new trait impls.

pub mod context;
pub mod inertial;
pub mod model;
pub mod reynolds;


pub use context::{AgentView, Neighbor, NextState};
pub use inertial::InertialBehavior;
pub use model::BehaviorModel;
pub use reynolds::ReynoldsFlocking;
