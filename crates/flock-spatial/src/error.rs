use flock_core::{AgentId, FlockError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpatialError {
    /// A position update would be NaN or infinite.  Fatal to the run: storing
    /// it would break the space's `[0, width) × [0, height)` invariant.
    #[error("{agent}: position ({x}, {y}) is not finite")]
    OutOfBounds {
        agent: AgentId,
        x:     f64,
        y:     f64,
    },

    #[error("{0} has not been placed in the space")]
    AgentNotPlaced(AgentId),

    #[error(transparent)]
    Config(#[from] FlockError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
