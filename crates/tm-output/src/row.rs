//! Plain data row types written by output backends.

use tm_core::{Action, StateIndex};
use tm_episode::StepRecord;
use tm_mdp::{MdpResult, Reward, StateSpace, TransitionTable};

/// One rollout step, flattened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRow {
    pub episode:          u64,
    pub step:             usize,
    pub state_index:      u32,
    /// Slot codes, e.g. `(2,1,0,0)`.
    pub state:            String,
    pub action:           u8,
    pub next_state_index: u32,
    pub next_state:       String,
    pub reward:           Reward,
    pub car_x:            i32,
    pub car_y:            i32,
}

impl From<&StepRecord> for StepRow {
    fn from(r: &StepRecord) -> Self {
        Self {
            episode:          r.episode,
            step:             r.step,
            state_index:      r.state.0,
            state:            r.state_raw.to_string(),
            action:           r.action.code(),
            next_state_index: r.next_state.0,
            next_state:       r.next_raw.to_string(),
            reward:           r.reward,
            car_x:            r.car.x,
            car_y:            r.car.y,
        }
    }
}

/// One outcome of a `(state, action)` pair of the transition table.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionRow {
    pub state_index:      u32,
    pub state:            String,
    pub action:           u8,
    pub next_state_index: u32,
    pub probability:      f64,
    pub reward:           Reward,
    pub done:             bool,
}

impl TransitionRow {
    /// Flatten `table` in its iteration order, rendering states through
    /// `space`.
    pub fn collect(table: &TransitionTable, space: &StateSpace) -> MdpResult<Vec<Self>> {
        table
            .iter()
            .map(|(s, a, t)| Self::new(space, s, a, t.next_state, t.probability, t.reward, t.done))
            .collect()
    }

    fn new(
        space:       &StateSpace,
        s:           StateIndex,
        a:           Action,
        next:        StateIndex,
        probability: f64,
        reward:      Reward,
        done:        bool,
    ) -> MdpResult<Self> {
        Ok(Self {
            state_index: s.0,
            state: space.get(s)?.to_string(),
            action: a.code(),
            next_state_index: next.0,
            probability,
            reward,
            done,
        })
    }
}
