//! Independent runs for parameter sweeps and seed ensembles.
//!
//! Every task builds its own [`FlockSimulation`] from its own seed, so runs
//! share nothing mutable and can execute on any thread in any order.  With
//! the `parallel` feature they fan out over Rayon's global pool; results are
//! always returned in task order.

use std::time::{Duration, Instant};

use flock_core::{FlockParams, SimConfig, Tick, rng::mix_seed};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{FlockSimulation, NoopObserver, SimResult};

/// One run: model parameters plus the run-level config (including its seed).
#[derive(Clone, Debug, PartialEq)]
pub struct BatchTask {
    pub params: FlockParams,
    pub config: SimConfig,
}

/// End-of-run result of one [`BatchTask`].
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Position of the task in the batch.
    pub index:          usize,
    pub seed:           u64,
    /// Ticks actually completed.
    pub ticks:          Tick,
    pub polarization:   f64,
    pub mean_neighbors: f64,
    /// Wall-clock time of the run, construction included.
    pub elapsed:        Duration,
}

/// Runs a list of [`BatchTask`]s and collects one result per task.
pub struct BatchRunner {
    tasks: Vec<BatchTask>,
}

impl BatchRunner {
    pub fn new(tasks: Vec<BatchTask>) -> Self {
        Self { tasks }
    }

    /// `task_num` copies of the same parameters, task `k` seeded with
    /// `mix_seed(seed_base, k)`.
    pub fn seeded(params: &FlockParams, config: &SimConfig, task_num: usize, seed_base: u64) -> Self {
        let tasks = (0..task_num)
            .map(|k| BatchTask {
                params: params.clone(),
                config: SimConfig {
                    seed: mix_seed(seed_base, k as u64),
                    ..config.clone()
                },
            })
            .collect();
        Self { tasks }
    }

    pub fn tasks(&self) -> &[BatchTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Execute every task.  A failing task yields an `Err` in its slot and
    /// does not affect the others.
    pub fn run(&self) -> Vec<SimResult<RunSummary>> {
        tracing::info!(tasks = self.tasks.len(), "batch started");

        #[cfg(feature = "parallel")]
        let results: Vec<_> = self
            .tasks
            .par_iter()
            .enumerate()
            .map(|(i, t)| run_task(i, t))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, t)| run_task(i, t))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(tasks = results.len(), failed, "batch finished");
        results
    }
}

fn run_task(index: usize, task: &BatchTask) -> SimResult<RunSummary> {
    let start = Instant::now();
    let seed = task.config.seed;

    let mut sim = FlockSimulation::new(task.params.clone(), seed)?;
    let ticks = sim.run(&task.config, &mut NoopObserver)?;

    let summary = RunSummary {
        index,
        seed,
        ticks,
        polarization: sim.polarization(),
        mean_neighbors: sim.mean_neighbors(),
        elapsed: start.elapsed(),
    };
    tracing::debug!(
        index,
        seed,
        ticks = ticks.0,
        polarization = summary.polarization,
        "task finished"
    );
    Ok(summary)
}
