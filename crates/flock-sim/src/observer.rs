//! Simulation observer trait for progress reporting and data collection.

use flock_agent::AgentSnapshot;
use flock_core::Tick;

/// Flock-level statistics for one completed tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TickSummary {
    /// The tick count after the step, i.e. how many steps have run.
    pub tick: Tick,
    /// Length of the mean heading, in `[0, 1]`.
    pub polarization: f64,
    /// Average neighbor count seen by each boid during its activation.
    pub mean_neighbors: f64,
}

/// Callbacks invoked by [`FlockSimulation::run`][crate::FlockSimulation::run]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait SimObserver {
    /// Called after every completed tick.
    fn on_tick_end(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot ticks (every `config.output_interval_ticks` ticks,
    /// plus tick 0 before the first step) with every boid's state.
    ///
    /// The slice is in ascending `AgentId` order.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[AgentSnapshot]) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Logs a progress line every `interval` ticks through `tracing`.
pub struct ProgressLogger {
    interval: u64,
    total:    u64,
}

impl ProgressLogger {
    /// `total` is only used to print `tick/total`; it does not stop the run.
    pub fn new(interval: u64, total: u64) -> Self {
        Self { interval: interval.max(1), total }
    }
}

impl SimObserver for ProgressLogger {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let tick = summary.tick.0;
        if tick.is_multiple_of(self.interval) || tick == self.total {
            tracing::info!(
                tick,
                total = self.total,
                polarization = summary.polarization,
                mean_neighbors = summary.mean_neighbors,
                "progress"
            );
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        tracing::info!(final_tick = final_tick.0, "run finished");
    }
}

// Forward through `&mut O` so callers can lend an observer to a combinator.
impl<O: SimObserver + ?Sized> SimObserver for &mut O {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        (**self).on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[AgentSnapshot]) {
        (**self).on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        (**self).on_sim_end(final_tick);
    }
}

/// Drive two observers from one run, `A` first.
pub struct Both<A, B>(pub A, pub B);

impl<A: SimObserver, B: SimObserver> SimObserver for Both<A, B> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.0.on_tick_end(summary);
        self.1.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &[AgentSnapshot]) {
        self.0.on_snapshot(tick, agents);
        self.1.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.0.on_sim_end(final_tick);
        self.1.on_sim_end(final_tick);
    }
}
