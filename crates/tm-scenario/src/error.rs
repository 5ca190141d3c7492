use thiserror::Error;

use tm_core::GridPoint;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("scenario parse error: {0}")]
    Parse(String),

    #[error("{kind} {key:?} placed at both {first} and {second}")]
    ConflictingPoint {
        kind:   &'static str,
        key:    String,
        first:  GridPoint,
        second: GridPoint,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ScenarioResult<T> = Result<T, ScenarioError>;
