//! `RandomOrderScheduler`: every agent once per tick, in shuffled order.

use flock_core::{AgentId, SimRng};

/// Holds the live agent set and activates it in a fresh random order per
/// tick.
#[derive(Clone, Debug, Default)]
pub struct RandomOrderScheduler {
    agents: Vec<AgentId>,
    /// Scratch buffer reused across ticks; holds the most recent order.
    order:  Vec<AgentId>,
}

impl RandomOrderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scheduler pre-populated with `agents`.
    pub fn with_agents(agents: impl IntoIterator<Item = AgentId>) -> Self {
        let agents: Vec<AgentId> = agents.into_iter().collect();
        Self {
            order: Vec::with_capacity(agents.len()),
            agents,
        }
    }

    /// Register an agent.  Agents are never removed.
    pub fn add(&mut self, agent: AgentId) {
        self.agents.push(agent);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }

    /// Registered agents in registration order.
    pub fn agents(&self) -> &[AgentId] {
        &self.agents
    }

    /// The activation order used by the most recent [`step`](Self::step).
    /// Empty before the first step.
    pub fn last_order(&self) -> &[AgentId] {
        &self.order
    }

    /// Run one tick: draw a uniform permutation of the agent set from `rng`
    /// and call `activate` once per agent in that order.
    ///
    /// The first error returned by `activate` aborts the tick; agents later
    /// in the order are not activated and the error is returned unchanged.
    /// Returns the number of agents activated.
    pub fn step<E>(
        &mut self,
        rng:          &mut SimRng,
        mut activate: impl FnMut(AgentId) -> Result<(), E>,
    ) -> Result<usize, E> {
        self.order.clear();
        self.order.extend_from_slice(&self.agents);
        rng.shuffle(&mut self.order);

        for &agent in &self.order {
            activate(agent)?;
        }
        Ok(self.order.len())
    }
}
