//! Core agent storage.
//!
//! Every `Vec` field has exactly `count` elements; the `AgentId` value is the
//! index into all of them:
//!
//! ```ignore
//! let heading = store.headings[agent.index()];  // O(1), cache-friendly
//! ```

use flock_core::{AgentId, Vec2};

/// Read-only view of one boid at the current tick, as handed to rendering
/// and export code.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentSnapshot {
    pub id:       AgentId,
    pub position: Vec2,
    pub heading:  Vec2,
}

/// Structure-of-Arrays storage for per-boid state other than position.
///
/// The population never changes during a run, so `count` is fixed at
/// construction.
#[derive(Clone, Debug)]
pub struct AgentStore {
    /// Number of agents.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Unit direction of travel.  Scaled by the model speed each tick.
    pub headings: Vec<Vec2>,
}

impl AgentStore {
    /// `true` if there are no agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    #[inline]
    pub fn heading(&self, agent: AgentId) -> Vec2 {
        self.headings[agent.index()]
    }

    #[inline]
    pub fn set_heading(&mut self, agent: AgentId, heading: Vec2) {
        self.headings[agent.index()] = heading;
    }

    /// Mean of all headings.  Its length is the flock's polarization: 1 when
    /// every boid points the same way, near 0 for a disordered flock.
    pub fn mean_heading(&self) -> Vec2 {
        if self.headings.is_empty() {
            return Vec2::ZERO;
        }
        let mut sum = Vec2::ZERO;
        for &h in &self.headings {
            sum += h;
        }
        sum / self.headings.len() as f64
    }
}
