//! Fluent builder for constructing a [`FlockSimulation`].

use flock_agent::AgentStoreBuilder;
use flock_behavior::{BehaviorModel, ReynoldsFlocking};
use flock_core::{AgentId, FlockParams, SimRng, Tick, Vec2};
use flock_schedule::RandomOrderScheduler;
use flock_spatial::ToroidalSpace;

use crate::{FlockSimulation, SimError, SimResult};

/// Fluent builder for [`FlockSimulation<B>`].
///
/// # Required inputs
///
/// - [`FlockParams`]: population, space extents, radii, weights
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                      |
/// |--------------------------|----------------------------------------------|
/// | `.seed(s)`               | `0`                                          |
/// | `.initial_positions(v)`  | Uniform over `[0, width) × [0, height)`      |
/// | `.initial_headings(v)`   | Uniform random unit vectors                  |
/// | `.behavior(b)`           | `ReynoldsFlocking::from_params(&params)`     |
///
/// Random positions are drawn first (x then y, per agent in id order), then
/// random headings, all from the one RNG seeded with `seed`.  The same RNG
/// then drives activation order for the rest of the run.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(params)
///     .seed(42)
///     .behavior(InertialBehavior)
///     .build()?;
/// sim.run(&config, &mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel = ReynoldsFlocking> {
    params:    FlockParams,
    seed:      u64,
    positions: Option<Vec<Vec2>>,
    headings:  Option<Vec<Vec2>>,
    behavior:  B,
}

impl SimBuilder<ReynoldsFlocking> {
    /// Create a builder using the Reynolds rule configured from `params`.
    pub fn new(params: FlockParams) -> Self {
        let behavior = ReynoldsFlocking::from_params(&params);
        Self {
            params,
            seed: 0,
            positions: None,
            headings: None,
            behavior,
        }
    }
}

impl<B: BehaviorModel> SimBuilder<B> {
    /// Seed for initial placement and activation order.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Supply the initial position of each boid (length `population`).
    ///
    /// Positions outside the space are wrapped onto it; non-finite ones fail
    /// [`build`](Self::build).
    pub fn initial_positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Supply the initial heading of each boid (length `population`).  Each is
    /// normalized and must be finite and non-zero.
    pub fn initial_headings(mut self, headings: Vec<Vec2>) -> Self {
        self.headings = Some(headings);
        self
    }

    /// Replace the update rule.
    pub fn behavior<B2: BehaviorModel>(self, behavior: B2) -> SimBuilder<B2> {
        SimBuilder {
            params:    self.params,
            seed:      self.seed,
            positions: self.positions,
            headings:  self.headings,
            behavior,
        }
    }

    /// Validate inputs, place every boid, and return a ready-to-run
    /// simulation at tick 0.
    pub fn build(self) -> SimResult<FlockSimulation<B>> {
        let params = self.params;
        params.validate()?;
        if params.separation > params.vision {
            tracing::warn!(
                separation = params.separation,
                vision = params.vision,
                "separation exceeds vision; neighbors beyond vision never separate"
            );
        }
        let population = params.population;

        // ── Validate optional inputs ──────────────────────────────────────
        check_len(self.positions.as_deref(), population, "initial positions")?;
        check_len(self.headings.as_deref(), population, "initial headings")?;

        // ── Draw initial state ────────────────────────────────────────────
        let mut rng = SimRng::new(self.seed);

        let positions = match self.positions {
            Some(p) => p,
            None => (0..population)
                .map(|_| {
                    let x = rng.gen_range(0.0..params.width);
                    let y = rng.gen_range(0.0..params.height);
                    Vec2::new(x, y)
                })
                .collect(),
        };

        let mut agents = AgentStoreBuilder::new(population);
        if let Some(h) = self.headings {
            agents = agents.headings(h);
        }
        let agents = agents.build(&mut rng)?;

        // ── Place boids ───────────────────────────────────────────────────
        let mut space = ToroidalSpace::with_capacity(params.width, params.height, population)?;
        for (i, pos) in positions.into_iter().enumerate() {
            space.place_agent(AgentId(i as u32), pos)?;
        }
        let scheduler = RandomOrderScheduler::with_agents(agents.agent_ids());

        tracing::debug!(
            population,
            seed = self.seed,
            width = params.width,
            height = params.height,
            "simulation built"
        );

        Ok(FlockSimulation {
            params,
            space,
            agents,
            scheduler,
            behavior: self.behavior,
            running: true,
            tick: Tick::ZERO,
            rng,
            last_neighbor_total: 0,
            neighbor_buf: Vec::new(),
        })
    }
}

fn check_len<T>(given: Option<&[T]>, expected: usize, what: &'static str) -> SimResult<()> {
    match given {
        Some(v) if v.len() != expected => Err(SimError::AgentCountMismatch {
            expected,
            got: v.len(),
            what,
        }),
        _ => Ok(()),
    }
}
