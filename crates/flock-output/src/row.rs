//! Plain data row types written by output backends.

use flock_agent::AgentSnapshot;
use flock_core::Tick;
use flock_sim::TickSummary;

/// One boid's position and heading at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionRow {
    pub tick:      u64,
    pub agent_id:  u32,
    pub x:         f64,
    pub y:         f64,
    pub heading_x: f64,
    pub heading_y: f64,
}

impl PositionRow {
    pub fn new(tick: Tick, agent: &AgentSnapshot) -> Self {
        Self {
            tick:      tick.0,
            agent_id:  agent.id.0,
            x:         agent.position.x,
            y:         agent.position.y,
            heading_x: agent.heading.x,
            heading_y: agent.heading.y,
        }
    }
}

/// Flock-level statistics for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub polarization:   f64,
    pub mean_neighbors: f64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:           s.tick.0,
            polarization:   s.polarization,
            mean_neighbors: s.mean_neighbors,
        }
    }
}
