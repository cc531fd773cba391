//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! activation of every agent; there is no wall-clock mapping because the
//! flocking model has no physical time unit.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:03}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Run-level configuration: how long to run, how to seed, how often to
/// snapshot.
///
/// Typically loaded from the `[general]` table of a TOML parameter file by
/// the application crate and passed to the simulation runner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Free-form run label, echoed into logs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,

    /// Maximum number of ticks a driver executes.
    pub step_max: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: u64,

    /// Snapshot every N ticks.  1 = every tick; 0 disables snapshots.
    #[cfg_attr(feature = "serde", serde(default = "default_output_interval"))]
    pub output_interval_ticks: u64,
}

#[cfg(feature = "serde")]
fn default_output_interval() -> u64 {
    1
}

impl SimConfig {
    pub fn new(step_max: u64, seed: u64) -> Self {
        Self {
            description: String::new(),
            step_max,
            seed,
            output_interval_ticks: 1,
        }
    }

    /// The tick at which a driven run ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.step_max)
    }

    /// `true` if a snapshot is due at `tick`.
    #[inline]
    pub fn is_snapshot_tick(&self, tick: Tick) -> bool {
        self.output_interval_ticks > 0 && tick.0.is_multiple_of(self.output_interval_ticks)
    }
}
