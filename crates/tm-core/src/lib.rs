//! `tm-core` — foundational types for the `transit_mdp` workspace.
//!
//! This crate is a dependency of every other `tm-*` crate.  It has no `tm-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `StateIndex`, `OrderId`, `Action`                      |
//! | [`slot`]   | `Slot` enum (`Unassigned`, `Completed`, `Active`)      |
//! | [`state`]  | `State` — one `Slot` per order                         |
//! | [`geo`]    | `GridPoint`, Manhattan distance, grid walks            |
//! | [`config`] | `ModelConfig`, `Order`                                 |
//! | [`rng`]    | `EpisodeRng` (per-episode, deterministic)              |
//! | [`error`]  | `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod slot;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ModelConfig, Order};
pub use error::{CoreError, CoreResult};
pub use geo::GridPoint;
pub use ids::{Action, OrderId, StateIndex};
pub use rng::EpisodeRng;
pub use slot::Slot;
pub use state::State;
