//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, StepRow, TransitionRow};

/// A sink for episode steps and transition-table rows.
///
/// Errors surfacing through [`EpisodeOutputObserver`][crate::EpisodeOutputObserver]
/// are stored there and retrieved with `take_error`.
pub trait OutputWriter {
    /// Write a batch of episode steps.
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()>;

    /// Write a batch of transition-table rows.
    fn write_transitions(&mut self, rows: &[TransitionRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
