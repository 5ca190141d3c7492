//! Full transition table: every non-terminal `(state, action)` pair with its
//! successor, probability, reward and done flag.
//!
//! The table is what a dynamic-programming planner iterates over.  It is
//! built once from any [`FiniteMdp`]; with the `parallel` feature the rows
//! of different states are computed on Rayon's pool.

use std::collections::BTreeMap;

use tracing::debug;

use tm_core::{Action, StateIndex};

use crate::{FiniteMdp, MdpResult, Reward};

/// One outcome of taking an action.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Transition {
    pub next_state:  StateIndex,
    pub probability: f64,
    pub reward:      Reward,
    /// `true` when `next_state` is terminal.
    pub done:        bool,
}

type Row = ((StateIndex, Action), Vec<Transition>);

/// `(state, action)` → outcomes, ordered by state then action.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    rows: BTreeMap<(StateIndex, Action), Vec<Transition>>,
}

impl TransitionTable {
    pub fn build<M: FiniteMdp + ?Sized>(mdp: &M) -> MdpResult<Self> {
        let states: Vec<StateIndex> =
            (0..mdp.state_count()).map(|i| StateIndex(i as u32)).collect();

        #[cfg(not(feature = "parallel"))]
        let per_state: Vec<Vec<Row>> = states
            .iter()
            .map(|&s| rows_for(mdp, s))
            .collect::<MdpResult<_>>()?;

        #[cfg(feature = "parallel")]
        let per_state: Vec<Vec<Row>> = {
            use rayon::prelude::*;

            states
                .par_iter()
                .map(|&s| rows_for(mdp, s))
                .collect::<MdpResult<_>>()?
        };

        let rows: BTreeMap<_, _> = per_state.into_iter().flatten().collect();
        debug!(states = states.len(), pairs = rows.len(), "transition table built");
        Ok(Self { rows })
    }

    /// Outcomes of `(s, a)`; `None` for terminal states and illegal actions.
    pub fn get(&self, s: StateIndex, a: Action) -> Option<&[Transition]> {
        self.rows.get(&(s, a)).map(Vec::as_slice)
    }

    /// Number of `(state, action)` pairs.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flattened `(state, action, outcome)` triples in table order.
    pub fn iter(&self) -> impl Iterator<Item = (StateIndex, Action, &Transition)> + '_ {
        self.rows
            .iter()
            .flat_map(|(&(s, a), ts)| ts.iter().map(move |t| (s, a, t)))
    }
}

fn rows_for<M: FiniteMdp + ?Sized>(mdp: &M, s: StateIndex) -> MdpResult<Vec<Row>> {
    if mdp.is_terminal(s)? {
        return Ok(Vec::new());
    }
    mdp.actions(s)?
        .into_iter()
        .map(|a| {
            let outcomes = mdp
                .transitions(s, a)?
                .into_iter()
                .map(|(next, probability)| {
                    Ok(Transition {
                        next_state: next,
                        probability,
                        reward: mdp.reward(s, a, next)?,
                        done: mdp.is_terminal(next)?,
                    })
                })
                .collect::<MdpResult<Vec<_>>>()?;
            Ok(((s, a), outcomes))
        })
        .collect()
}
