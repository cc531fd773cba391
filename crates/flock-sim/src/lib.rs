//! `flock-sim`: tick loop orchestrator for the rust_flock framework.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.step_max (while running):
//!   ① Order     shuffle all boid ids with the simulation RNG.
//!   ② Activate  for each boid in that order:
//!                  neighbors  = space.neighbors_with_offsets(pos, vision)
//!                  next       = behavior.next_state(me, neighbors, speed)
//!                  space.move_agent(id, next.position)   (wrapped, immediate)
//!                  agents.set_heading(id, next.heading)
//!   ③ Observe   on_tick_end, then on_snapshot on snapshot ticks.
//! ```
//!
//! Updates are in place: a boid activated later in a tick sees the new
//! positions and headings of every boid activated before it.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs [`BatchRunner`] tasks on Rayon's thread pool.     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use flock_core::{FlockParams, SimConfig};
//! use flock_sim::{FlockSimulation, NoopObserver};
//!
//! let mut sim = FlockSimulation::new(FlockParams::default(), 42)?;
//! sim.run(&SimConfig::new(1_000, 42), &mut NoopObserver)?;
//! println!("polarization = {:.3}", sim.polarization());
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use batch::{BatchRunner, BatchTask, RunSummary};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{Both, NoopObserver, ProgressLogger, SimObserver, TickSummary};
pub use sim::FlockSimulation;
