//! The MDP state: one [`Slot`] per order.
//!
//! A `State` is only a container; which states are *valid* (at most one
//! `Active` slot, reachable from the all-unassigned start) is decided by the
//! enumeration in `tm-mdp`.

use std::fmt;

use crate::{CoreResult, OrderId, Slot};

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct State(Vec<Slot>);

impl State {
    /// The all-`Unassigned` state for `orders` slots.
    pub fn initial(orders: usize) -> Self {
        State(vec![Slot::Unassigned; orders])
    }

    pub fn from_slots(slots: Vec<Slot>) -> Self {
        State(slots)
    }

    /// Decode the `(2,0,0,0)` tuple notation.
    pub fn from_codes(codes: &[u8]) -> CoreResult<Self> {
        codes
            .iter()
            .map(|&c| Slot::try_from(c))
            .collect::<CoreResult<Vec<_>>>()
            .map(State)
    }

    pub fn codes(&self) -> Vec<u8> {
        self.0.iter().map(|s| s.code()).collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    #[inline]
    pub fn slot(&self, order: OrderId) -> Option<Slot> {
        self.0.get(order.index()).copied()
    }

    /// The order currently being fulfilled, if any (first `Active` slot).
    pub fn active(&self) -> Option<OrderId> {
        self.0
            .iter()
            .position(|&s| s == Slot::Active)
            .map(|i| OrderId(i as u8))
    }

    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|&&s| s == Slot::Active).count()
    }

    /// Orders not started yet, in ascending slot order.
    pub fn unassigned(&self) -> impl Iterator<Item = OrderId> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Slot::Unassigned)
            .map(|(i, _)| OrderId(i as u8))
    }

    /// `true` when no slot is `Unassigned`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !self.0.contains(&Slot::Unassigned)
    }

    /// Apply the service rule: every started slot collapses to `Completed`
    /// and `order` becomes `Active`.
    ///
    /// Does not check that `order` was `Unassigned`; callers validate first.
    pub fn serve(&self, order: OrderId) -> State {
        let mut next: Vec<Slot> = self
            .0
            .iter()
            .map(|&s| if s.is_served() { Slot::Completed } else { s })
            .collect();
        next[order.index()] = Slot::Active;
        State(next)
    }
}

impl From<Vec<Slot>> for State {
    fn from(slots: Vec<Slot>) -> Self {
        State(slots)
    }
}

/// Tuple notation: `(1,2,0,0)`.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, s) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", s.code())?;
        }
        f.write_str(")")
    }
}
