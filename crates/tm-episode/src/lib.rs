//! `tm-episode` — driving through the model one order at a time.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                        |
//! |--------------|-----------------------------------------------------------------|
//! | [`policy`]   | `Policy` trait, `FixedOrder`, `RandomPolicy`, `NearestPickup`   |
//! | [`rollout`]  | `Rollout`, `StepRecord`, `EpisodeSummary`                       |
//! | [`observer`] | `EpisodeObserver` trait, `NoopObserver`                         |
//! | [`error`]    | `EpisodeError`, `EpisodeResult<T>`                              |
//!
//! # Episode loop
//!
//! ```text
//! state = initial, car = driver start, path = [car]
//! while !terminal(state):
//!   ① Choose   — policy.choose(mdp, state, rng)       (None → Stalled)
//!   ② Step     — next = sample(next_states(state, a)), reward(state, a, next)
//!   ③ Drive    — path += car → pickup → drop-off      (x first, then y)
//!   ④ Observe  — observer.on_step(&record)
//! ```
//!
//! Every step turns one unassigned order active, so an episode over N orders
//! always has exactly N steps.  Policies here are fixed rules or heuristics;
//! nothing learns.

pub mod error;
pub mod observer;
pub mod policy;
pub mod rollout;


pub use error::{EpisodeError, EpisodeResult};
pub use observer::{EpisodeObserver, NoopObserver};
pub use policy::{FixedOrder, NearestPickup, Policy, RandomPolicy};
pub use rollout::{EpisodeSummary, Rollout, StepRecord};
