//! `ToroidalSpace`: positions on a wrap-around rectangle.

use flock_core::{AgentId, FlockError, Vec2};

use crate::{SpatialError, SpatialResult};

// ── Axis helpers ──────────────────────────────────────────────────────────────

/// Wrap a finite coordinate into the half-open interval `[0, extent)`.
///
/// `rem_euclid` can round a tiny negative input up to exactly `extent`; that
/// case is folded back to `0.0` so the upper bound stays exclusive.
#[inline]
pub fn wrap_axis(value: f64, extent: f64) -> f64 {
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Minimum-image displacement along one axis of length `extent`.
///
/// The result lies in `[-extent/2, extent/2]` and satisfies
/// `min_image(-d, e) == -min_image(d, e)` exactly away from the half-extent
/// tie, so wrap-aware distance is symmetric bit-for-bit.
#[inline]
pub fn min_image(delta: f64, extent: f64) -> f64 {
    let half = extent * 0.5;
    let d = delta % extent;
    if d > half {
        d - extent
    } else if d < -half {
        d + extent
    } else {
        d
    }
}

// ── SpaceNeighbor ─────────────────────────────────────────────────────────────

/// One hit from a neighbor query, carrying the geometry the steering rule
/// needs so it is not recomputed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpaceNeighbor {
    pub agent:  AgentId,
    /// Minimum-image displacement from the query point to the neighbor.
    pub offset: Vec2,
    /// Wrap-aware Euclidean distance, `offset.length()`.
    pub distance: f64,
}

// ── ToroidalSpace ─────────────────────────────────────────────────────────────

/// A `width × height` rectangle whose edges wrap on both axes.
///
/// Positions are stored Structure-of-Arrays style, indexed by `AgentId`.
/// Slots for agents that have not been placed yet hold `None`.
#[derive(Clone, Debug)]
pub struct ToroidalSpace {
    width:     f64,
    height:    f64,
    positions: Vec<Option<Vec2>>,
    placed:    usize,
}

impl ToroidalSpace {
    /// Create an empty space.  Both extents must be positive and finite.
    pub fn new(width: f64, height: f64) -> SpatialResult<Self> {
        Self::with_capacity(width, height, 0)
    }

    /// Like [`new`](Self::new), pre-allocating slots for `capacity` agents.
    pub fn with_capacity(width: f64, height: f64, capacity: usize) -> SpatialResult<Self> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(FlockError::Config(format!(
                "space extent must be positive and finite, got {width} × {height}"
            ))
            .into());
        }
        Ok(Self {
            width,
            height,
            positions: Vec::with_capacity(capacity),
            placed: 0,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Number of placed agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.placed
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.placed == 0
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Map a finite point onto the torus.
    #[inline]
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(pos.x, self.width), wrap_axis(pos.y, self.height))
    }

    /// Minimum-image displacement from `a` to `b`.
    ///
    /// `self.wrap(a + self.wrap_offset(a, b))` lands on `b` (up to rounding)
    /// whichever boundary the short path crosses.
    #[inline]
    pub fn wrap_offset(&self, a: Vec2, b: Vec2) -> Vec2 {
        Vec2::new(
            min_image(b.x - a.x, self.width),
            min_image(b.y - a.y, self.height),
        )
    }

    /// Wrap-aware Euclidean distance.  Never exceeds the plain distance.
    #[inline]
    pub fn distance(&self, a: Vec2, b: Vec2) -> f64 {
        self.wrap_offset(a, b).length()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Insert `agent` at `pos`.
    ///
    /// Finite out-of-range coordinates are wrapped; NaN or infinite ones fail
    /// with [`SpatialError::OutOfBounds`].  Placing an agent twice simply
    /// overwrites its position.
    pub fn place_agent(&mut self, agent: AgentId, pos: Vec2) -> SpatialResult<Vec2> {
        check_finite(agent, pos)?;
        let idx = agent.index();
        if idx >= self.positions.len() {
            self.positions.resize(idx + 1, None);
        }
        let wrapped = self.wrap(pos);
        if self.positions[idx].replace(wrapped).is_none() {
            self.placed += 1;
        }
        Ok(wrapped)
    }

    /// Move a placed agent to `new_pos`, wrapping each axis independently.
    ///
    /// The update is visible to the next query immediately.  On error the
    /// stored position is left untouched.  Returns the stored (wrapped)
    /// position.
    pub fn move_agent(&mut self, agent: AgentId, new_pos: Vec2) -> SpatialResult<Vec2> {
        check_finite(agent, new_pos)?;
        let wrapped = self.wrap(new_pos);
        let slot = self
            .positions
            .get_mut(agent.index())
            .and_then(Option::as_mut)
            .ok_or(SpatialError::AgentNotPlaced(agent))?;
        *slot = wrapped;
        Ok(wrapped)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Current position of `agent`, or `None` if it was never placed.
    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<Vec2> {
        self.positions.get(agent.index()).copied().flatten()
    }

    /// Current position of `agent`.
    pub fn position(&self, agent: AgentId) -> SpatialResult<Vec2> {
        self.get(agent).ok_or(SpatialError::AgentNotPlaced(agent))
    }

    /// All placed agents with their positions, in ascending `AgentId` order.
    pub fn iter(&self) -> impl Iterator<Item = (AgentId, Vec2)> + '_ {
        self.positions
            .iter()
            .enumerate()
            .filter_map(|(i, p)| p.map(|pos| (AgentId(i as u32), pos)))
    }

    /// Agents within `radius` of `pos` (boundary inclusive), skipping
    /// `exclude` if given.  Results are in ascending `AgentId` order.
    pub fn neighbors_within(
        &self,
        pos:     Vec2,
        radius:  f64,
        exclude: Option<AgentId>,
    ) -> Vec<AgentId> {
        self.neighbors_with_offsets(pos, radius, exclude)
            .map(|n| n.agent)
            .collect()
    }

    /// Like [`neighbors_within`](Self::neighbors_within) but yields the
    /// minimum-image offset and distance of each hit as well.
    ///
    /// Linear scan over all placed agents.  The boundary test uses the same
    /// length as [`distance`](Self::distance), so an agent at exactly
    /// `distance(pos, other) == radius` is always a hit.
    pub fn neighbors_with_offsets(
        &self,
        pos:     Vec2,
        radius:  f64,
        exclude: Option<AgentId>,
    ) -> impl Iterator<Item = SpaceNeighbor> + '_ {
        self.iter().filter_map(move |(agent, other)| {
            if Some(agent) == exclude {
                return None;
            }
            let offset = self.wrap_offset(pos, other);
            let distance = offset.length();
            (distance <= radius).then_some(SpaceNeighbor { agent, offset, distance })
        })
    }
}

fn check_finite(agent: AgentId, pos: Vec2) -> SpatialResult<()> {
    if pos.is_finite() {
        Ok(())
    } else {
        Err(SpatialError::OutOfBounds { agent, x: pos.x, y: pos.y })
    }
}
