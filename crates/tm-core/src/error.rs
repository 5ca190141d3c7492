//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers decoding
//! of the raw integer codes that cross crate boundaries.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid slot code {0}: expected 0 (unassigned), 1 (completed) or 2 (active)")]
    InvalidSlot(u8),

    #[error("invalid action code {0}: actions are 1-based")]
    InvalidAction(u8),
}

/// Shorthand result type for `tm-core`.
pub type CoreResult<T> = Result<T, CoreError>;
