//! Episode observer trait for progress reporting and data collection.

use tm_core::StateIndex;

use crate::{EpisodeSummary, StepRecord};

/// Callbacks invoked by [`Rollout::run`][crate::Rollout::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl EpisodeObserver for StepPrinter {
///     fn on_step(&mut self, step: &StepRecord) {
///         println!("{} --{}--> {} ({})", step.state, step.action, step.next_state, step.reward);
///     }
/// }
/// ```
pub trait EpisodeObserver {
    /// Called before the first step, with the initial state.
    fn on_episode_start(&mut self, _episode: u64, _state: StateIndex) {}

    /// Called after every transition.
    fn on_step(&mut self, _step: &StepRecord) {}

    /// Called once the terminal state is reached.
    fn on_episode_end(&mut self, _summary: &EpisodeSummary) {}
}

/// An [`EpisodeObserver`] that does nothing.
pub struct NoopObserver;

impl EpisodeObserver for NoopObserver {}
