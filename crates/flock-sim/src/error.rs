use flock_core::FlockError;
use flock_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    /// Invalid or missing simulation parameters.
    #[error(transparent)]
    Config(#[from] FlockError),

    /// A position update was non-finite, or an agent was missing from the
    /// space.  Fatal to the run.
    #[error(transparent)]
    Spatial(#[from] SpatialError),

    #[error("{what} length {got} does not match population {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type SimResult<T> = Result<T, SimError>;
