//! The `BehaviorModel` trait: the extension point for agent kinds.

use flock_core::Vec2;

use crate::{AgentView, Neighbor, NextState};

/// Pluggable boid behavior.
///
/// Only [`next_heading`][Self::next_heading] is required.
/// [`next_state`][Self::next_state] derives the displacement from it.
///
/// # Contract
///
/// - With an empty `neighbors` slice the returned heading must equal
///   `me.heading` bit-for-bit.
/// - Any heading that differs from `me.heading` must be unit length.
/// - The result must be finite whenever the inputs are.
///
/// # Example
///
/// ```rust,ignore
/// struct Contrarian;
///
/// impl BehaviorModel for Contrarian {
///     fn next_heading(&self, me: &AgentView, neighbors: &[Neighbor]) -> Vec2 {
///         if neighbors.is_empty() { me.heading } else { -me.heading }
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Compute the heading `me` travels along this tick.
    fn next_heading(&self, me: &AgentView, neighbors: &[Neighbor]) -> Vec2;

    /// Heading plus the unwrapped position one `speed` step along it.
    fn next_state(&self, me: &AgentView, neighbors: &[Neighbor], speed: f64) -> NextState {
        let heading = self.next_heading(me, neighbors);
        NextState {
            position: me.position + heading * speed,
            heading,
        }
    }
}
