//! `tm-output` — writing episodes and transition tables to disk.
//!
//! | Type                     | Role                                               |
//! |--------------------------|----------------------------------------------------|
//! | [`OutputWriter`]         | backend trait                                      |
//! | [`CsvWriter`]            | `episode_steps.csv`, `transitions.csv`             |
//! | [`EpisodeOutputObserver`]| forwards rollout steps to any `OutputWriter`       |
//! | [`StepRow`], [`TransitionRow`] | flat rows shared by backends             |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tm_output::{CsvWriter, EpisodeOutputObserver, OutputWriter, TransitionRow};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_transitions(&TransitionRow::collect(&table, mdp.space())?)?;
//!
//! let mut obs = EpisodeOutputObserver::new(writer);
//! Rollout::new(&mdp, 42).run_many(10, &RandomPolicy, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! obs.into_writer().finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use crate::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::EpisodeOutputObserver;
pub use row::{StepRow, TransitionRow};
pub use writer::OutputWriter;
