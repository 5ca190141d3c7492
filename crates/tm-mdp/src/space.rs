//! Eager state-space enumeration and the state↔index codec.
//!
//! # Enumeration order
//!
//! ```text
//! index 0                        all slots Unassigned
//! for active in 0..N             (ascending)
//!   for k in 0..N                (number of Completed slots)
//!     for c in combinations(other slots, k)   (lexicographic)
//!       next index               slot[active] = Active, slot[c] = Completed
//! ```
//!
//! Every `(active, completed-set)` pair appears exactly once, so the list has
//! no duplicates and `1 + N * 2^(N-1)` entries.  The position in the list is
//! the state index; nothing is persisted, the list is rebuilt identically on
//! each construction.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use tracing::debug;

use tm_core::{Slot, State, StateIndex};

use crate::{MdpError, MdpResult};

/// Largest supported order count.  16 orders already give 524,289 states.
pub const MAX_ORDERS: usize = 16;

/// The enumerated states plus a hashed reverse lookup.
///
/// Immutable after [`generate`][Self::generate]; safe to share across threads.
#[derive(Debug, Clone)]
pub struct StateSpace {
    orders: usize,
    states: Vec<State>,
    lookup: FxHashMap<State, StateIndex>,
}

impl StateSpace {
    /// Enumerate every valid state for `orders` slots.
    pub fn generate(orders: usize) -> MdpResult<Self> {
        if orders == 0 {
            return Err(MdpError::NoOrders);
        }
        if orders > MAX_ORDERS {
            return Err(MdpError::TooManyOrders { got: orders, max: MAX_ORDERS });
        }

        let mut states = Vec::with_capacity(Self::expected_len(orders));
        states.push(State::initial(orders));

        for active in 0..orders {
            let others: Vec<usize> = (0..orders).filter(|&j| j != active).collect();
            for k in 0..orders {
                for completed in others.iter().copied().combinations(k) {
                    let mut slots = vec![Slot::Unassigned; orders];
                    slots[active] = Slot::Active;
                    for j in completed {
                        slots[j] = Slot::Completed;
                    }
                    states.push(State::from_slots(slots));
                }
            }
        }

        let lookup: FxHashMap<State, StateIndex> = states
            .iter()
            .enumerate()
            .map(|(i, s)| (s.clone(), StateIndex(i as u32)))
            .collect();

        debug!(orders, states = states.len(), "state space enumerated");

        Ok(Self { orders, states, lookup })
    }

    /// `1 + N * 2^(N-1)`; `1` for `N = 0`.
    pub fn expected_len(orders: usize) -> usize {
        match orders {
            0 => 1,
            n => 1 + n * (1usize << (n - 1)),
        }
    }

    /// Number of order slots in every state.
    #[inline]
    pub fn orders(&self) -> usize {
        self.orders
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Index → state.
    pub fn get(&self, index: StateIndex) -> MdpResult<&State> {
        self.states.get(index.index()).ok_or(MdpError::OutOfRange {
            index,
            len: self.states.len(),
        })
    }

    /// State → index; fails for anything the enumeration never produced.
    pub fn index_of(&self, state: &State) -> MdpResult<StateIndex> {
        self.lookup
            .get(state)
            .copied()
            .ok_or_else(|| MdpError::UnknownState(state.clone()))
    }

    /// All states in index order.
    pub fn iter(&self) -> impl Iterator<Item = (StateIndex, &State)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (StateIndex(i as u32), s))
    }
}
