//! Static model configuration.
//!
//! Supplied once when the model is built and never changed afterwards.
//! Loading from files lives in `tm-scenario`; this module only defines the
//! shape and a few fluent helpers for assembling configs in code.

use std::collections::BTreeMap;

use crate::GridPoint;

/// One pickup-and-delivery order: which passenger to collect and where to
/// drop them off.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "(String, String)", into = "(String, String)"))]
pub struct Order {
    /// Key into [`ModelConfig::passengers`] (matched exactly).
    pub passenger:   String,
    /// Key into [`ModelConfig::locations`] (matched case-insensitively).
    pub destination: String,
}

impl Order {
    pub fn new(passenger: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            passenger:   passenger.into(),
            destination: destination.into(),
        }
    }
}

impl From<(String, String)> for Order {
    fn from((passenger, destination): (String, String)) -> Self {
        Order { passenger, destination }
    }
}

impl From<Order> for (String, String) {
    fn from(o: Order) -> Self {
        (o.passenger, o.destination)
    }
}

/// Everything the MDP needs besides the number of slots (which is
/// `destinations.len()`).
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelConfig {
    pub driver_start_point: GridPoint,
    /// Orders in slot order; slot `i` of every state refers to `destinations[i]`.
    pub destinations:       Vec<Order>,
    pub passengers:         BTreeMap<String, GridPoint>,
    pub locations:          BTreeMap<String, GridPoint>,
}

impl ModelConfig {
    pub fn new(driver_start_point: GridPoint) -> Self {
        Self {
            driver_start_point,
            ..Default::default()
        }
    }

    /// Append an order (the next slot).
    pub fn order(mut self, passenger: impl Into<String>, destination: impl Into<String>) -> Self {
        self.destinations.push(Order::new(passenger, destination));
        self
    }

    pub fn passenger(mut self, key: impl Into<String>, at: GridPoint) -> Self {
        self.passengers.insert(key.into(), at);
        self
    }

    pub fn location(mut self, key: impl Into<String>, at: GridPoint) -> Self {
        self.locations.insert(key.into(), at);
        self
    }

    /// Number of order slots in every state.
    #[inline]
    pub fn order_count(&self) -> usize {
        self.destinations.len()
    }
}
