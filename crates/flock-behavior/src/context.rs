//! Read-only inputs and outputs of a behavior callback.

use flock_core::{AgentId, Vec2};

/// The boid being stepped, as seen at the moment of its activation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentView {
    pub id:       AgentId,
    pub position: Vec2,
    pub heading:  Vec2,
}

/// One neighbor inside the vision radius.
///
/// Geometry is relative to the boid being stepped and already follows the
/// minimum-image convention, so models never need to know about wrapping.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    pub id:       AgentId,
    /// Displacement from the stepped boid to this neighbor.
    pub offset:   Vec2,
    /// `offset.length()`.
    pub distance: f64,
    /// The neighbor's heading as currently stored (it may already have been
    /// updated earlier in this tick).
    pub heading:  Vec2,
}

/// Where a boid wants to be after its activation.
///
/// `position` is unwrapped; the space folds it back onto the torus.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NextState {
    pub position: Vec2,
    pub heading:  Vec2,
}
