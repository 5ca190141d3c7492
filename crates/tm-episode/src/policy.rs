//! The `Policy` trait — who picks the next order.

use tm_core::{Action, EpisodeRng, StateIndex};
use tm_mdp::{MdpResult, TransportationMdp};

/// Pluggable action selection.
///
/// `choose` returns `Ok(None)` when the policy has nothing to offer in a
/// non-terminal state; the rollout reports that as
/// [`EpisodeError::Stalled`][crate::EpisodeError::Stalled].  An action that
/// is not legal in `state` surfaces as the model's `InvalidAction`.
///
/// # Thread safety
///
/// Policies hold no per-episode state (randomness comes in through `rng`),
/// so one instance can drive rollouts on several threads.
pub trait Policy: Send + Sync {
    fn choose(
        &self,
        mdp:   &TransportationMdp,
        state: StateIndex,
        rng:   &mut EpisodeRng,
    ) -> MdpResult<Option<Action>>;

    /// Short label for logs and output files.
    fn name(&self) -> &str;
}

// ── FixedOrder ────────────────────────────────────────────────────────────────

/// Serve orders following a preference list: the first listed action that
/// is still legal wins.
#[derive(Clone, Debug)]
pub struct FixedOrder {
    preference: Vec<Action>,
}

impl FixedOrder {
    pub fn new(preference: Vec<Action>) -> Self {
        Self { preference }
    }

    /// Slot order: `1, 2, …, n`.
    pub fn ascending(n: u8) -> Self {
        Self::new((1..=n).map(Action).collect())
    }
}

impl Policy for FixedOrder {
    fn choose(
        &self,
        mdp:   &TransportationMdp,
        state: StateIndex,
        _rng:  &mut EpisodeRng,
    ) -> MdpResult<Option<Action>> {
        let legal = mdp.possible_actions(state)?;
        Ok(self.preference.iter().copied().find(|a| legal.contains(a)))
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

// ── RandomPolicy ──────────────────────────────────────────────────────────────

/// Uniform over the legal actions.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn choose(
        &self,
        mdp:   &TransportationMdp,
        state: StateIndex,
        rng:   &mut EpisodeRng,
    ) -> MdpResult<Option<Action>> {
        let legal = mdp.possible_actions(state)?;
        Ok(rng.choose(&legal).copied())
    }

    fn name(&self) -> &str {
        "random"
    }
}

// ── NearestPickup ─────────────────────────────────────────────────────────────

/// Greedy one-step lookahead: the legal action with the highest immediate
/// reward, i.e. the shortest car → pickup → drop-off trip.  Ties go to the
/// lowest action.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestPickup;

impl Policy for NearestPickup {
    fn choose(
        &self,
        mdp:   &TransportationMdp,
        state: StateIndex,
        _rng:  &mut EpisodeRng,
    ) -> MdpResult<Option<Action>> {
        let mut best: Option<(Action, tm_mdp::Reward)> = None;
        for action in mdp.possible_actions(state)? {
            let next = mdp.successor(state, action)?;
            let reward = mdp.reward(state, action, next)?;
            if best.is_none_or(|(_, r)| reward > r) {
                best = Some((action, reward));
            }
        }
        Ok(best.map(|(a, _)| a))
    }

    fn name(&self) -> &str {
        "nearest"
    }
}
