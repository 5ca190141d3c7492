//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `episode_steps.csv`
//! - `transitions.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;
use tracing::debug;

use crate::writer::OutputWriter;
use crate::{OutputResult, StepRow, TransitionRow};

pub const STEPS_FILE: &str = "episode_steps.csv";
pub const TRANSITIONS_FILE: &str = "transitions.csv";

/// Writes episodes and the transition table to two CSV files.
pub struct CsvWriter {
    steps:       Writer<File>,
    transitions: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open both files and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut steps = Writer::from_path(dir.join(STEPS_FILE))?;
        steps.write_record([
            "episode",
            "step",
            "state_index",
            "state",
            "action",
            "next_state_index",
            "next_state",
            "reward",
            "car_x",
            "car_y",
        ])?;

        let mut transitions = Writer::from_path(dir.join(TRANSITIONS_FILE))?;
        transitions.write_record([
            "state_index",
            "state",
            "action",
            "next_state_index",
            "probability",
            "reward",
            "done",
        ])?;

        debug!(dir = %dir.display(), "csv output opened");
        Ok(Self {
            steps,
            transitions,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()> {
        for row in rows {
            self.steps.write_record(&[
                row.episode.to_string(),
                row.step.to_string(),
                row.state_index.to_string(),
                row.state.clone(),
                row.action.to_string(),
                row.next_state_index.to_string(),
                row.next_state.clone(),
                row.reward.to_string(),
                row.car_x.to_string(),
                row.car_y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_transitions(&mut self, rows: &[TransitionRow]) -> OutputResult<()> {
        for row in rows {
            self.transitions.write_record(&[
                row.state_index.to_string(),
                row.state.clone(),
                row.action.to_string(),
                row.next_state_index.to_string(),
                row.probability.to_string(),
                row.reward.to_string(),
                (row.done as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.steps.flush()?;
        self.transitions.flush()?;
        Ok(())
    }
}
