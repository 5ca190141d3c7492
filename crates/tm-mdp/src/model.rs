//! `TransportationMdp` — the query surface of the model.
//!
//! Every query takes its state as `impl Into<StateRef>` (a [`StateIndex`] or
//! a `&State`) and normalises it with [`index_to_state`] before doing
//! anything else.  Nothing is mutated after [`TransportationMdp::new`], so a
//! single instance can be queried from many threads at once.
//!
//! [`index_to_state`]: TransportationMdp::index_to_state

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use tm_core::{Action, GridPoint, ModelConfig, OrderId, Slot, State, StateIndex};

use crate::{MdpError, MdpResult, StateRef, StateSpace};

/// Rewards are negated Manhattan distances, hence integral.
pub type Reward = i64;

/// Successor distribution: next state index → probability.  Transitions are
/// deterministic, so every map returned by this crate has one entry of `1.0`.
pub type Successors = BTreeMap<StateIndex, f64>;

/// Returned by [`TransportationMdp::reward`] for a `(state, next_state)` pair
/// that no legal action connects.  A sentinel, not a distance.
pub const IMPOSSIBLE_TRANSITION_PENALTY: Reward = -1;

/// Pickup and drop-off cells of one order, resolved at construction so
/// queries never touch the string-keyed maps.
#[derive(Copy, Clone, Debug)]
struct Leg {
    pickup:  GridPoint,
    dropoff: GridPoint,
}

/// The enumerated pickup-and-delivery MDP for one driver.
#[derive(Debug, Clone)]
pub struct TransportationMdp {
    config: ModelConfig,
    legs:   Vec<Leg>,
    space:  StateSpace,
}

impl TransportationMdp {
    /// Validate `config`, resolve every order's coordinates and enumerate the
    /// state space.
    ///
    /// Location keys are matched case-insensitively against each order's
    /// destination; passenger keys are matched exactly.
    pub fn new(config: ModelConfig) -> MdpResult<Self> {
        let space = StateSpace::generate(config.order_count())?;

        let mut locations: FxHashMap<String, GridPoint> = FxHashMap::default();
        for (key, &at) in &config.locations {
            if locations.insert(key.to_lowercase(), at).is_some() {
                return Err(MdpError::DuplicateLocation(key.clone()));
            }
        }

        let legs = config
            .destinations
            .iter()
            .enumerate()
            .map(|(i, order)| {
                let id = OrderId(i as u8);
                let pickup = config.passengers.get(&order.passenger).copied().ok_or_else(|| {
                    MdpError::MissingPassenger { order: id, key: order.passenger.clone() }
                })?;
                let dropoff = locations
                    .get(&order.destination.to_lowercase())
                    .copied()
                    .ok_or_else(|| MdpError::MissingLocation {
                        order: id,
                        key:   order.destination.clone(),
                    })?;
                Ok(Leg { pickup, dropoff })
            })
            .collect::<MdpResult<Vec<_>>>()?;

        debug!(
            orders = legs.len(),
            states = space.len(),
            start = %config.driver_start_point,
            "transportation MDP built"
        );

        Ok(Self { config, legs, space })
    }

    // ── Static data ───────────────────────────────────────────────────────

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn space(&self) -> &StateSpace {
        &self.space
    }

    #[inline]
    pub fn order_count(&self) -> usize {
        self.legs.len()
    }

    #[inline]
    pub fn state_count(&self) -> usize {
        self.space.len()
    }

    /// The all-unassigned state is always enumerated first.
    #[inline]
    pub fn initial_state(&self) -> StateIndex {
        StateIndex(0)
    }

    /// Pickup and drop-off cells of the order `action` services; `None` for
    /// an action outside `1..=N`.
    pub fn leg(&self, action: Action) -> Option<(GridPoint, GridPoint)> {
        action
            .order()
            .and_then(|o| self.legs.get(o.index()))
            .map(|l| (l.pickup, l.dropoff))
    }

    // ── Codec ─────────────────────────────────────────────────────────────

    /// Normalise either representation to a `&State`.
    ///
    /// An index resolves to its enumerated state (`OutOfRange` otherwise).  A
    /// raw state is passed through unchanged as long as it has one slot per
    /// order; it does not have to be enumerated.
    pub fn index_to_state<'a>(&'a self, state: impl Into<StateRef<'a>>) -> MdpResult<&'a State> {
        match state.into() {
            StateRef::Index(index) => self.space.get(index),
            StateRef::State(s) if s.len() == self.order_count() => Ok(s),
            StateRef::State(s) => Err(MdpError::UnknownState(s.clone())),
        }
    }

    pub fn state_to_index(&self, state: &State) -> MdpResult<StateIndex> {
        self.space.index_of(state)
    }

    /// Every state index, in enumeration order.
    pub fn all_states(&self) -> Vec<StateIndex> {
        (0..self.space.len()).map(|i| StateIndex(i as u32)).collect()
    }

    // ── Dynamics ──────────────────────────────────────────────────────────

    /// Actions whose slot is still `Unassigned`, ascending.  Empty iff the
    /// state is terminal.
    pub fn possible_actions<'a>(&'a self, state: impl Into<StateRef<'a>>) -> MdpResult<Vec<Action>> {
        let s = self.index_to_state(state)?;
        Ok(s.unassigned().map(Action::for_order).collect())
    }

    /// The successor distribution of `(state, action)`: exactly one entry
    /// with probability `1.0`.
    pub fn next_states<'a>(
        &'a self,
        state:  impl Into<StateRef<'a>>,
        action: Action,
    ) -> MdpResult<Successors> {
        let next = self.successor(state, action)?;
        Ok(Successors::from([(next, 1.0)]))
    }

    /// The unique successor of `(state, action)`.
    ///
    /// Served slots collapse to `Completed`, the targeted slot becomes
    /// `Active`.  Fails with `InvalidAction` unless the targeted slot is
    /// `Unassigned`.
    pub fn successor<'a>(
        &'a self,
        state:  impl Into<StateRef<'a>>,
        action: Action,
    ) -> MdpResult<StateIndex> {
        let s = self.index_to_state(state)?;
        let order = match action.order() {
            Some(o) if s.slot(o) == Some(Slot::Unassigned) => o,
            _ => {
                return Err(MdpError::InvalidAction { action, state: s.clone() });
            }
        };
        self.space.index_of(&s.serve(order))
    }

    pub fn is_terminal<'a>(&'a self, state: impl Into<StateRef<'a>>) -> MdpResult<bool> {
        Ok(self.index_to_state(state)?.is_terminal())
    }

    // ── Geometry and reward ───────────────────────────────────────────────

    /// Where the car stands in `state`: the drop-off of the `Active` order,
    /// or the driver start point when no order is active.
    pub fn car_position<'a>(&'a self, state: impl Into<StateRef<'a>>) -> MdpResult<GridPoint> {
        let s = self.index_to_state(state)?;
        Ok(match s.active() {
            Some(order) => self.legs[order.index()].dropoff,
            None => self.config.driver_start_point,
        })
    }

    /// `true` iff some legal action in `state` leads to `next_state`.
    ///
    /// A well-formed `next_state` outside the enumeration is never reachable.
    pub fn check_transportation_possibility<'a>(
        &'a self,
        state:      impl Into<StateRef<'a>>,
        next_state: impl Into<StateRef<'a>>,
    ) -> MdpResult<bool> {
        let s = self.index_to_state(state)?;
        let next = self.index_to_state(next_state)?;
        let Ok(target) = self.space.index_of(next) else {
            return Ok(false);
        };
        for action in self.possible_actions(s)? {
            if self.next_states(s, action)?.contains_key(&target) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Negated travel distance of serving `action` from `state`: car to
    /// pickup, then pickup to drop-off.
    ///
    /// Pairs that no legal action connects get
    /// [`IMPOSSIBLE_TRANSITION_PENALTY`] regardless of `action`.  For a
    /// connected pair the distance is taken from `action`'s order even if a
    /// different action is the one that reaches `next_state`.
    pub fn reward<'a>(
        &'a self,
        state:      impl Into<StateRef<'a>>,
        action:     Action,
        next_state: impl Into<StateRef<'a>>,
    ) -> MdpResult<Reward> {
        let s = self.index_to_state(state)?;
        let next = self.index_to_state(next_state)?;
        if !self.check_transportation_possibility(s, next)? {
            trace!(state = %s, next = %next, "impossible transition");
            return Ok(IMPOSSIBLE_TRANSITION_PENALTY);
        }

        let (pickup, dropoff) = self
            .leg(action)
            .ok_or_else(|| MdpError::InvalidAction { action, state: s.clone() })?;
        let driver = self.car_position(s)?;
        // Each leg is below 2^33, so the sum fits an i64.
        let distance = driver.manhattan(pickup) + pickup.manhattan(dropoff);
        Ok(-(distance as Reward))
    }
}
