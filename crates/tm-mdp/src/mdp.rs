//! The `FiniteMdp` trait — the index-only view planners consume.

use tm_core::{Action, StateIndex};

use crate::{MdpResult, Reward, Successors, TransportationMdp};

/// Finite MDP over dense state indices.
///
/// This is the seam between the model and whatever consumes it (value
/// iteration, policy iteration, a test harness).  [`TransitionTable`] is
/// built through it, so any other finite model can be exported the same way.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`: queries are pure and the table
/// builder may call them from Rayon workers.
///
/// [`TransitionTable`]: crate::TransitionTable
pub trait FiniteMdp: Send + Sync {
    /// Number of states; indices are `0..state_count()`.
    fn state_count(&self) -> usize;

    fn initial_state(&self) -> StateIndex;

    /// Legal actions in `s`; empty for terminal states.
    fn actions(&self, s: StateIndex) -> MdpResult<Vec<Action>>;

    fn transitions(&self, s: StateIndex, a: Action) -> MdpResult<Successors>;

    fn reward(&self, s: StateIndex, a: Action, next: StateIndex) -> MdpResult<Reward>;

    fn is_terminal(&self, s: StateIndex) -> MdpResult<bool>;
}

impl FiniteMdp for TransportationMdp {
    fn state_count(&self) -> usize {
        TransportationMdp::state_count(self)
    }

    fn initial_state(&self) -> StateIndex {
        TransportationMdp::initial_state(self)
    }

    fn actions(&self, s: StateIndex) -> MdpResult<Vec<Action>> {
        self.possible_actions(s)
    }

    fn transitions(&self, s: StateIndex, a: Action) -> MdpResult<Successors> {
        self.next_states(s, a)
    }

    fn reward(&self, s: StateIndex, a: Action, next: StateIndex) -> MdpResult<Reward> {
        TransportationMdp::reward(self, s, a, next)
    }

    fn is_terminal(&self, s: StateIndex) -> MdpResult<bool> {
        TransportationMdp::is_terminal(self, s)
    }
}
