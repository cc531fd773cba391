//! `flock-schedule`: per-tick agent activation order.
//!
//! # Crate layout
//!
//! | Module           | Contents                                      |
//! |------------------|-----------------------------------------------|
//! | [`random_order`] | `RandomOrderScheduler`                        |
//!
//! # Why a fresh shuffle every tick
//!
//! Agents mutate the shared space in place, so an agent activated late in a
//! tick sees neighbors that have already moved while an early one does not.
//! Drawing a new uniform permutation each tick means no fixed subset of the
//! population is systematically stale.  The outcome still depends on the
//! order; it is only unbiased in expectation.  With a seeded `SimRng` the
//! order, and therefore the whole run, is reproducible.

pub mod random_order;


pub use random_order::RandomOrderScheduler;
