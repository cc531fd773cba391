//! Flat model parameter set shared read-only by every boid.

use crate::{FlockError, FlockResult};

/// The model parameters a simulation is built from.
///
/// Field names follow the `[model]` table of the parameter file; the three
/// weight factors are spelled `cohere`, `separate`, and `match` there.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlockParams {
    /// Number of boids.  Must be at least 1.
    pub population: usize,

    /// Extent of the toroidal space along x.
    pub width: f64,

    /// Extent of the toroidal space along y.
    pub height: f64,

    /// Distance travelled per tick.
    pub speed: f64,

    /// Sensing radius for the neighbor query (inclusive).
    pub vision: f64,

    /// Neighbors strictly closer than this are pushed away.  Expected to be
    /// no larger than `vision`.
    pub separation: f64,

    #[cfg_attr(feature = "serde", serde(rename = "cohere"))]
    pub cohere_factor: f64,

    #[cfg_attr(feature = "serde", serde(rename = "separate"))]
    pub separate_factor: f64,

    #[cfg_attr(feature = "serde", serde(rename = "match"))]
    pub match_factor: f64,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            population:      100,
            width:           100.0,
            height:          100.0,
            speed:           1.0,
            vision:          10.0,
            separation:      2.0,
            cohere_factor:   0.025,
            separate_factor: 0.25,
            match_factor:    0.04,
        }
    }
}

impl FlockParams {
    /// Reject parameter sets that would produce silently degenerate motion.
    ///
    /// Non-positive population, dimensions or speed, negative radii or
    /// weights, and any non-finite value fail with [`FlockError::Config`].
    pub fn validate(&self) -> FlockResult<()> {
        if self.population == 0 {
            return Err(FlockError::Config("population must be at least 1".into()));
        }
        if u32::try_from(self.population).is_err() {
            return Err(FlockError::Config(format!(
                "population {} exceeds the AgentId range",
                self.population
            )));
        }
        positive("width", self.width)?;
        positive("height", self.height)?;
        positive("speed", self.speed)?;
        non_negative("vision", self.vision)?;
        non_negative("separation", self.separation)?;
        non_negative("cohere", self.cohere_factor)?;
        non_negative("separate", self.separate_factor)?;
        non_negative("match", self.match_factor)?;
        Ok(())
    }

    /// `true` when every steering weight is zero, i.e. boids move inertially.
    pub fn is_inertial(&self) -> bool {
        self.cohere_factor == 0.0 && self.separate_factor == 0.0 && self.match_factor == 0.0
    }
}

fn positive(name: &str, value: f64) -> FlockResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FlockError::Config(format!("{name} must be a positive finite number, got {value}")))
    }
}

fn non_negative(name: &str, value: f64) -> FlockResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(FlockError::Config(format!("{name} must be a non-negative finite number, got {value}")))
    }
}
