//! Reynolds-style flocking: cohesion, separation, alignment.
//!
//! Per activation, with `N` neighbors inside the vision radius:
//!
//! ```text
//! cohere   = (1/N) Σ offset(n)                       pull toward local centroid
//! separate =  −Σ offset(n)   for n with dist < sep   push off crowding neighbors
//! match    = (1/N) Σ (heading(n) − heading)          pull toward mean heading
//!
//! heading' = normalize(heading + c·cohere + s·separate + m·match)
//! ```
//!
//! Three cases keep the previous heading bit-for-bit instead of
//! renormalizing: no neighbors, an exactly zero weighted steering sum, and an
//! exactly zero raw heading.

use flock_core::{FlockParams, Vec2};

use crate::{AgentView, BehaviorModel, Neighbor};

/// The classical three-force boid rule.
#[derive(Clone, Debug, PartialEq)]
pub struct ReynoldsFlocking {
    /// Neighbors strictly closer than this contribute to separation.
    pub separation:      f64,
    pub cohere_factor:   f64,
    pub separate_factor: f64,
    pub match_factor:    f64,
}

impl ReynoldsFlocking {
    /// Take the separation distance and weights from a parameter set.
    ///
    /// No validation happens here; `FlockParams::validate` is the single
    /// gate, run by the simulation builder.
    pub fn from_params(params: &FlockParams) -> Self {
        Self {
            separation:      params.separation,
            cohere_factor:   params.cohere_factor,
            separate_factor: params.separate_factor,
            match_factor:    params.match_factor,
        }
    }

    /// Mean minimum-image offset to the neighbors.  Zero for an empty slice.
    pub fn cohere(neighbors: &[Neighbor]) -> Vec2 {
        mean(neighbors.iter().map(|n| n.offset), neighbors.len())
    }

    /// Sum of offsets pointing away from every neighbor closer than
    /// `self.separation`.  A coincident neighbor has a zero offset and so
    /// contributes nothing.
    pub fn separate(&self, neighbors: &[Neighbor]) -> Vec2 {
        let mut push = Vec2::ZERO;
        for n in neighbors.iter().filter(|n| n.distance < self.separation) {
            push -= n.offset;
        }
        push
    }

    /// Mean heading difference `heading(n) − me.heading`.
    pub fn match_heading(me: &AgentView, neighbors: &[Neighbor]) -> Vec2 {
        mean(neighbors.iter().map(|n| n.heading - me.heading), neighbors.len())
    }

    /// The weighted steering sum added to the current heading.
    pub fn steering(&self, me: &AgentView, neighbors: &[Neighbor]) -> Vec2 {
        Self::cohere(neighbors) * self.cohere_factor
            + self.separate(neighbors) * self.separate_factor
            + Self::match_heading(me, neighbors) * self.match_factor
    }
}

impl BehaviorModel for ReynoldsFlocking {
    fn next_heading(&self, me: &AgentView, neighbors: &[Neighbor]) -> Vec2 {
        if neighbors.is_empty() {
            return me.heading;
        }
        let steer = self.steering(me, neighbors);
        if steer == Vec2::ZERO {
            return me.heading;
        }
        (me.heading + steer).try_normalize().unwrap_or(me.heading)
    }
}

fn mean(vectors: impl Iterator<Item = Vec2>, count: usize) -> Vec2 {
    if count == 0 {
        return Vec2::ZERO;
    }
    let mut sum = Vec2::ZERO;
    for v in vectors {
        sum += v;
    }
    sum / count as f64
}
