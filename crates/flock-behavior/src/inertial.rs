//! A behavior model in which boids ignore each other.

use flock_core::Vec2;

use crate::{AgentView, BehaviorModel, Neighbor};

/// A [`BehaviorModel`] that always keeps the current heading.
///
/// Every boid travels in a straight line (wrapping at the edges) forever.
/// Useful as a baseline in tests and sweeps.
pub struct InertialBehavior;

impl BehaviorModel for InertialBehavior {
    fn next_heading(&self, me: &AgentView, _neighbors: &[Neighbor]) -> Vec2 {
        me.heading
    }
}
