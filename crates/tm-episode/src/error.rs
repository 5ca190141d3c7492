use thiserror::Error;

use tm_core::{State, StateIndex};
use tm_mdp::MdpError;

#[derive(Debug, Error)]
pub enum EpisodeError {
    #[error("policy {policy:?} chose no action in non-terminal state {state}")]
    Stalled { policy: String, state: State },

    #[error("cannot sample a successor of {state}: {reason}")]
    Sampling { state: StateIndex, reason: String },

    #[error("model error: {0}")]
    Mdp(#[from] MdpError),
}

pub type EpisodeResult<T> = Result<T, EpisodeError>;
