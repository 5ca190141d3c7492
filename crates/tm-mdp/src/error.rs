use thiserror::Error;

use tm_core::{Action, OrderId, State, StateIndex};

/// Errors produced by `tm-mdp`.
///
/// Codec and action errors are caller precondition violations.  An
/// impossible `(state, next_state)` pair is *not* an error: the reward
/// function answers it with [`IMPOSSIBLE_TRANSITION_PENALTY`].
///
/// [`IMPOSSIBLE_TRANSITION_PENALTY`]: crate::IMPOSSIBLE_TRANSITION_PENALTY
#[derive(Debug, Error, PartialEq)]
pub enum MdpError {
    #[error("{index} out of range: the model has {len} states")]
    OutOfRange { index: StateIndex, len: usize },

    #[error("state {0} is not in the enumerated state space")]
    UnknownState(State),

    #[error("action {action} is not legal in state {state}")]
    InvalidAction { action: Action, state: State },

    #[error("model configuration has no orders")]
    NoOrders,

    #[error("model configuration has {got} orders; at most {max} are supported")]
    TooManyOrders { got: usize, max: usize },

    #[error("{order} refers to unknown passenger {key:?}")]
    MissingPassenger { order: OrderId, key: String },

    #[error("{order} refers to unknown location {key:?}")]
    MissingLocation { order: OrderId, key: String },

    #[error("location key {0:?} collides with another key after case folding")]
    DuplicateLocation(String),
}

pub type MdpResult<T> = Result<T, MdpError>;
