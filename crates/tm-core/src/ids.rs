//! Strongly typed, zero-cost identifier wrappers.
//!
//! `StateIndex` and `OrderId` are 0-based and index straight into `Vec`s.
//! `Action` is 1-based (action `a` services order `a - 1`) and is kept as a
//! separate type so the two numbering schemes never mix silently.

use std::fmt;

use crate::{CoreError, CoreResult};

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Dense position of a state in the enumeration order.
    pub struct StateIndex(u32);
}

typed_id! {
    /// 0-based position of an order in the configured destination list.
    pub struct OrderId(u8);
}

// ── Action ────────────────────────────────────────────────────────────────────

/// A 1-based action: `Action(a)` services the order in slot `a - 1`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action(pub u8);

impl Action {
    /// Build an action from its 1-based code, rejecting `0`.
    pub fn new(code: u8) -> CoreResult<Self> {
        if code == 0 {
            return Err(CoreError::InvalidAction(code));
        }
        Ok(Action(code))
    }

    /// The action that services `order`.
    #[inline]
    pub fn for_order(order: OrderId) -> Self {
        Action(order.0 + 1)
    }

    /// The order slot this action targets.
    ///
    /// `Action(0)` is not a valid action; it maps to `None`.
    #[inline]
    pub fn order(self) -> Option<OrderId> {
        self.0.checked_sub(1).map(OrderId)
    }

    #[inline]
    pub fn code(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
