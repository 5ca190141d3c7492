//! `EpisodeOutputObserver<W>` — bridges `EpisodeObserver` to an `OutputWriter`.

use tm_episode::{EpisodeObserver, EpisodeSummary, StepRecord};

use crate::row::StepRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// An [`EpisodeObserver`] that writes every step to an [`OutputWriter`].
///
/// Steps are buffered per episode and written when the episode ends.
/// Observer hooks cannot fail, so the first write error is kept and handed
/// out by [`take_error`][Self::take_error].  The writer is not finished
/// here: several rollouts may share one observer.
pub struct EpisodeOutputObserver<W: OutputWriter> {
    writer:     W,
    pending:    Vec<StepRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> EpisodeOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending:    Vec::new(),
            last_error: None,
        }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer.  Steps of an unfinished episode are dropped.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EpisodeObserver for EpisodeOutputObserver<W> {
    fn on_episode_start(&mut self, _episode: u64, _state: tm_core::StateIndex) {
        self.pending.clear();
    }

    fn on_step(&mut self, step: &StepRecord) {
        self.pending.push(StepRow::from(step));
    }

    fn on_episode_end(&mut self, _summary: &EpisodeSummary) {
        let rows = std::mem::take(&mut self.pending);
        let result = self.writer.write_steps(&rows);
        self.store_err(result);
    }
}
