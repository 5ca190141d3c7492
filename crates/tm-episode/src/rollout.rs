//! Episode runner.

use rand::distributions::{Distribution, WeightedIndex};
use tracing::{debug, trace};

use tm_core::{Action, EpisodeRng, GridPoint, State, StateIndex};
use tm_mdp::{MdpError, Reward, Successors, TransportationMdp};

use crate::{EpisodeError, EpisodeObserver, EpisodeResult, Policy};

// ── Records ───────────────────────────────────────────────────────────────────

/// One transition of an episode.
#[derive(Clone, Debug, PartialEq)]
pub struct StepRecord {
    pub episode:    u64,
    /// 0-based position within the episode.
    pub step:       usize,
    pub state:      StateIndex,
    pub state_raw:  State,
    pub action:     Action,
    pub next_state: StateIndex,
    pub next_raw:   State,
    pub reward:     Reward,
    /// Car position after the step (the served order's drop-off).
    pub car:        GridPoint,
}

/// Outcome of a full episode.
#[derive(Clone, Debug, PartialEq)]
pub struct EpisodeSummary {
    pub episode:      u64,
    pub policy:       String,
    pub steps:        Vec<StepRecord>,
    pub total_reward: Reward,
    /// Every grid cell the car visited, starting with the driver start point.
    pub path:         Vec<GridPoint>,
    pub final_state:  StateIndex,
}

impl EpisodeSummary {
    /// Actions taken, in order.
    pub fn actions(&self) -> Vec<Action> {
        self.steps.iter().map(|s| s.action).collect()
    }

    /// Cells driven (path length minus the starting cell).
    pub fn distance(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

// ── Rollout ───────────────────────────────────────────────────────────────────

/// Runs episodes of one model.
///
/// Episode `k` draws its randomness from `EpisodeRng::new(seed, k)`, so any
/// episode can be replayed on its own.
pub struct Rollout<'m> {
    mdp:  &'m TransportationMdp,
    seed: u64,
}

impl<'m> Rollout<'m> {
    pub fn new(mdp: &'m TransportationMdp, seed: u64) -> Self {
        Self { mdp, seed }
    }

    /// Run episode number `episode` from the initial state to the terminal
    /// state.
    pub fn run<P, O>(
        &self,
        episode:  u64,
        policy:   &P,
        observer: &mut O,
    ) -> EpisodeResult<EpisodeSummary>
    where
        P: Policy + ?Sized,
        O: EpisodeObserver + ?Sized,
    {
        let mdp = self.mdp;
        let mut rng = EpisodeRng::new(self.seed, episode);

        let mut state = mdp.initial_state();
        let mut car = mdp.car_position(state)?;
        let mut path = vec![car];
        let mut steps = Vec::with_capacity(mdp.order_count());
        let mut total_reward: Reward = 0;

        observer.on_episode_start(episode, state);

        while !mdp.is_terminal(state)? {
            let state_raw = mdp.index_to_state(state)?.clone();

            let Some(action) = policy.choose(mdp, state, &mut rng)? else {
                return Err(EpisodeError::Stalled {
                    policy: policy.name().to_owned(),
                    state:  state_raw,
                });
            };

            let next = sample(&mdp.next_states(state, action)?, state, &mut rng)?;
            let reward = mdp.reward(state, action, next)?;
            // `next_states` already rejected actions outside 1..=N.
            let (pickup, dropoff) = mdp
                .leg(action)
                .ok_or_else(|| MdpError::InvalidAction { action, state: state_raw.clone() })?;

            path.extend(car.walk_to(pickup));
            path.extend(pickup.walk_to(dropoff));
            car = dropoff;
            total_reward += reward;

            let record = StepRecord {
                episode,
                step:       steps.len(),
                state,
                state_raw,
                action,
                next_state: next,
                next_raw:   mdp.index_to_state(next)?.clone(),
                reward,
                car,
            };
            trace!(
                episode,
                step = record.step,
                state = %record.state_raw,
                action = %action,
                next = %record.next_raw,
                reward,
                "step"
            );
            observer.on_step(&record);
            steps.push(record);
            state = next;
        }

        let summary = EpisodeSummary {
            episode,
            policy: policy.name().to_owned(),
            steps,
            total_reward,
            path,
            final_state: state,
        };
        debug!(
            episode,
            policy = %summary.policy,
            reward = summary.total_reward,
            distance = summary.distance(),
            "episode finished"
        );
        observer.on_episode_end(&summary);
        Ok(summary)
    }

    /// Run episodes `0..episodes` with the same policy.
    pub fn run_many<P, O>(
        &self,
        episodes: u64,
        policy:   &P,
        observer: &mut O,
    ) -> EpisodeResult<Vec<EpisodeSummary>>
    where
        P: Policy + ?Sized,
        O: EpisodeObserver + ?Sized,
    {
        let mut summaries = Vec::new();
        for k in 0..episodes {
            summaries.push(self.run(k, policy, &mut *observer)?);
        }
        Ok(summaries)
    }
}

/// Draw the next state from a successor distribution.
///
/// The model's transitions are deterministic, so a single-entry map is the
/// common case and skips the RNG entirely.
fn sample(
    successors: &Successors,
    state:      StateIndex,
    rng:        &mut EpisodeRng,
) -> EpisodeResult<StateIndex> {
    let sampling = |reason: String| EpisodeError::Sampling { state, reason };

    if successors.len() == 1 {
        if let Some(&only) = successors.keys().next() {
            return Ok(only);
        }
    }
    let dist = WeightedIndex::new(successors.values().copied())
        .map_err(|e| sampling(e.to_string()))?;
    successors
        .keys()
        .nth(dist.sample(rng.inner()))
        .copied()
        .ok_or_else(|| sampling("sampled index out of range".to_owned()))
}
