//! Per-order slot value.

use crate::{CoreError, CoreResult};

/// Progress of one order.  The discriminants are the wire codes used in the
/// `(2,0,0,0)` tuple notation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Slot {
    /// Not started yet (default state).
    #[default]
    Unassigned = 0,
    /// Delivered before the current order.
    Completed  = 1,
    /// The order the driver has just delivered; defines the car position.
    Active     = 2,
}

impl Slot {
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// `true` once the order has been started (active or completed).
    #[inline]
    pub fn is_served(self) -> bool {
        !matches!(self, Slot::Unassigned)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Unassigned => "unassigned",
            Slot::Completed  => "completed",
            Slot::Active     => "active",
        }
    }
}

impl TryFrom<u8> for Slot {
    type Error = CoreError;

    fn try_from(code: u8) -> CoreResult<Slot> {
        match code {
            0 => Ok(Slot::Unassigned),
            1 => Ok(Slot::Completed),
            2 => Ok(Slot::Active),
            n => Err(CoreError::InvalidSlot(n)),
        }
    }
}

impl From<Slot> for u8 {
    #[inline]
    fn from(slot: Slot) -> u8 {
        slot.code()
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
