//! Fluent builder for constructing an [`AgentStore`].
//!
//! # Usage
//!
//! ```rust
//! use flock_agent::AgentStoreBuilder;
//! use flock_core::SimRng;
//!
//! let mut rng = SimRng::new(42);
//! let store = AgentStoreBuilder::new(100).build(&mut rng).unwrap();
//!
//! assert_eq!(store.count, 100);
//! assert!(store.headings.iter().all(|h| (h.length() - 1.0).abs() < 1e-12));
//! ```

use flock_core::{FlockError, FlockResult, SimRng, Vec2};

use crate::AgentStore;

/// Draw a uniformly oriented, non-zero unit heading.
///
/// Samples the square `[-1, 1)²` and normalizes, redrawing the (practically
/// impossible) zero vector.
pub fn random_heading(rng: &mut SimRng) -> Vec2 {
    loop {
        let raw = Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));
        if let Some(unit) = raw.try_normalize() {
            return unit;
        }
    }
}

/// Fluent builder for [`AgentStore`].
pub struct AgentStoreBuilder {
    count:    usize,
    headings: Option<Vec<Vec2>>,
}

impl AgentStoreBuilder {
    /// Create a builder for `count` agents.
    pub fn new(count: usize) -> Self {
        Self { count, headings: None }
    }

    /// Supply explicit initial headings instead of random ones.
    ///
    /// Must be length `count`; each is normalized by [`build`](Self::build)
    /// and must be finite and non-zero.
    pub fn headings(mut self, headings: Vec<Vec2>) -> Self {
        self.headings = Some(headings);
        self
    }

    /// Validate inputs and return the store.  Random headings are drawn from
    /// `rng` only when none were supplied, one per agent in `AgentId` order.
    pub fn build(self, rng: &mut SimRng) -> FlockResult<AgentStore> {
        let headings = match self.headings {
            Some(given) => {
                if given.len() != self.count {
                    return Err(FlockError::Config(format!(
                        "initial headings length {} does not match agent count {}",
                        given.len(),
                        self.count
                    )));
                }
                given
                    .into_iter()
                    .enumerate()
                    .map(|(i, h)| {
                        h.try_normalize().ok_or_else(|| {
                            FlockError::Config(format!(
                                "initial heading {h} of agent {i} must be finite and non-zero"
                            ))
                        })
                    })
                    .collect::<FlockResult<Vec<_>>>()?
            }
            None => (0..self.count).map(|_| random_heading(rng)).collect(),
        };

        Ok(AgentStore {
            count: self.count,
            headings,
        })
    }
}
