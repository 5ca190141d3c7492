//! Argument type accepted by every query: a state index or a raw state.

use tm_core::{State, StateIndex};

/// Either representation of a state.
///
/// Queries normalise it once through
/// [`TransportationMdp::index_to_state`][crate::TransportationMdp::index_to_state]
/// and work on the resulting `&State`.
#[derive(Copy, Clone, Debug)]
pub enum StateRef<'a> {
    Index(StateIndex),
    State(&'a State),
}

impl From<StateIndex> for StateRef<'_> {
    fn from(index: StateIndex) -> Self {
        StateRef::Index(index)
    }
}

impl<'a> From<&'a State> for StateRef<'a> {
    fn from(state: &'a State) -> Self {
        StateRef::State(state)
    }
}
