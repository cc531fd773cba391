//! The `FlockSimulation` struct and its tick loop.

use flock_agent::{AgentSnapshot, AgentStore};
use flock_behavior::{AgentView, BehaviorModel, Neighbor, ReynoldsFlocking};
use flock_core::{AgentId, FlockParams, SimConfig, SimRng, Tick};
use flock_schedule::RandomOrderScheduler;
use flock_spatial::ToroidalSpace;

use crate::{SimBuilder, SimObserver, SimResult, TickSummary};

/// The main simulation runner.
///
/// `FlockSimulation<B>` owns the toroidal space (positions), the agent store
/// (headings), the scheduler, the behavior model, and the seeded RNG.  Each
/// [`step`](Self::step):
///
/// 1. draws a fresh activation order from the RNG;
/// 2. for every boid in that order: queries neighbors within the vision
///    radius, asks the behavior model for the next heading, and moves the
///    boid in the space immediately, so later boids in the same tick see it
///    already moved;
/// 3. advances the tick counter by one.
///
/// Create via [`FlockSimulation::new`] or [`SimBuilder`].
pub struct FlockSimulation<B: BehaviorModel = ReynoldsFlocking> {
    /// Model parameters shared read-only by every boid.
    pub params: FlockParams,

    /// Authoritative boid positions.
    pub space: ToroidalSpace,

    /// Boid headings (SoA), indexed by `AgentId`.
    pub agents: AgentStore,

    /// Random-order activation.
    pub scheduler: RandomOrderScheduler,

    /// The update rule.  Called once per boid per tick.
    pub behavior: B,

    /// Cleared by [`halt`](Self::halt); [`run`](Self::run) stops when it is
    /// false.  Nothing inside the model ever clears it.
    pub running: bool,

    pub(crate) tick: Tick,
    pub(crate) rng:  SimRng,

    /// Sum of neighbor counts over all activations of the last tick.
    pub(crate) last_neighbor_total: usize,

    /// Reused per activation to avoid a fresh allocation for every boid.
    pub(crate) neighbor_buf: Vec<Neighbor>,
}

impl FlockSimulation<ReynoldsFlocking> {
    /// Build a Reynolds-flocking simulation with random initial placement
    /// and headings drawn from `seed`.
    pub fn new(params: FlockParams, seed: u64) -> SimResult<Self> {
        SimBuilder::new(params).seed(seed).build()
    }
}

impl<B: BehaviorModel> FlockSimulation<B> {
    // ── Stepping ──────────────────────────────────────────────────────────

    /// Advance exactly one tick.
    ///
    /// A non-finite position update aborts the tick with
    /// [`SimError::Spatial`][crate::SimError::Spatial]; boids activated
    /// before the failure keep their new state and the tick counter does not
    /// advance.
    pub fn step(&mut self) -> SimResult<()> {
        let Self {
            params,
            space,
            agents,
            scheduler,
            behavior,
            rng,
            neighbor_buf,
            ..
        } = self;

        let mut neighbor_total = 0usize;
        scheduler.step(rng, |agent| -> SimResult<()> {
            neighbor_total += step_agent(agent, params, space, agents, &*behavior, neighbor_buf)?;
            Ok(())
        })?;

        self.last_neighbor_total = neighbor_total;
        self.tick = self.tick + 1;
        tracing::trace!(tick = self.tick.0, neighbor_total, "tick complete");
        Ok(())
    }

    /// Step until `config.end_tick()` or until [`running`](Self::running) is
    /// cleared, reporting to `observer`.  Returns the final tick.
    ///
    /// If the simulation is still at tick 0, the initial state is offered to
    /// [`SimObserver::on_snapshot`] before the first step.
    pub fn run<O: SimObserver>(&mut self, config: &SimConfig, observer: &mut O) -> SimResult<Tick> {
        if self.tick == Tick::ZERO && config.is_snapshot_tick(Tick::ZERO) {
            observer.on_snapshot(self.tick, &self.snapshot());
        }

        while self.running && self.tick < config.end_tick() {
            self.step()?;
            observer.on_tick_end(&self.summary());
            if config.is_snapshot_tick(self.tick) {
                observer.on_snapshot(self.tick, &self.snapshot());
            }
        }

        observer.on_sim_end(self.tick);
        Ok(self.tick)
    }

    /// Stop a [`run`](Self::run) after the current tick.
    pub fn halt(&mut self) {
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    // ── Inspection ────────────────────────────────────────────────────────

    /// Number of completed ticks.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Number of boids.  Constant for the lifetime of the simulation.
    #[inline]
    pub fn population(&self) -> usize {
        self.agents.count
    }

    /// One boid's current state, or `None` for an unknown id.
    pub fn agent(&self, id: AgentId) -> Option<AgentSnapshot> {
        let position = self.space.get(id)?;
        let heading = *self.agents.headings.get(id.index())?;
        Some(AgentSnapshot { id, position, heading })
    }

    /// Every boid's `(id, position, heading)` in ascending `AgentId` order.
    pub fn agents(&self) -> impl Iterator<Item = AgentSnapshot> + '_ {
        self.space.iter().map(|(id, position)| AgentSnapshot {
            id,
            position,
            heading: self.agents.heading(id),
        })
    }

    /// [`agents`](Self::agents) collected into a `Vec`.
    pub fn snapshot(&self) -> Vec<AgentSnapshot> {
        self.agents().collect()
    }

    /// Length of the mean heading: 1 for a perfectly aligned flock, near 0
    /// for a disordered one.
    pub fn polarization(&self) -> f64 {
        self.agents.mean_heading().length()
    }

    /// Average number of neighbors each boid saw during the last tick.
    /// Zero before the first step.
    pub fn mean_neighbors(&self) -> f64 {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.last_neighbor_total as f64 / self.agents.count as f64
    }

    /// Statistics for the current tick.
    pub fn summary(&self) -> TickSummary {
        TickSummary {
            tick:           self.tick,
            polarization:   self.polarization(),
            mean_neighbors: self.mean_neighbors(),
        }
    }
}

/// Activate one boid: query, steer, move.  Returns its neighbor count.
///
/// The heading is written only after the space accepted the move, so a
/// rejected (non-finite) update leaves the boid exactly as it was.
fn step_agent<B: BehaviorModel>(
    agent:     AgentId,
    params:    &FlockParams,
    space:     &mut ToroidalSpace,
    agents:    &mut AgentStore,
    behavior:  &B,
    neighbors: &mut Vec<Neighbor>,
) -> SimResult<usize> {
    let position = space.position(agent)?;
    let me = AgentView {
        id: agent,
        position,
        heading: agents.heading(agent),
    };

    neighbors.clear();
    neighbors.extend(
        space
            .neighbors_with_offsets(position, params.vision, Some(agent))
            .map(|hit| Neighbor {
                id:       hit.agent,
                offset:   hit.offset,
                distance: hit.distance,
                heading:  agents.heading(hit.agent),
            }),
    );

    let next = behavior.next_state(&me, neighbors, params.speed);
    space.move_agent(agent, next.position)?;
    agents.set_heading(agent, next.heading);
    Ok(neighbors.len())
}
