//! `tm-mdp` — the pickup-and-delivery problem as a finite, fully enumerated
//! Markov Decision Process.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`space`]   | `StateSpace` — eager enumeration and the state↔index codec   |
//! | [`input`]   | `StateRef` — "index or raw state" argument type              |
//! | [`model`]   | `TransportationMdp` — actions, transitions, reward, terminal |
//! | [`mdp`]     | `FiniteMdp` trait — index-only view for planners             |
//! | [`table`]   | `TransitionTable` — every `(s, a)` row, built once           |
//! | [`error`]   | `MdpError`, `MdpResult<T>`                                   |
//!
//! # State encoding
//!
//! ```text
//! slot i = 0  order i not started
//!          1  order i delivered earlier
//!          2  order i is the one just delivered (car stands at its drop-off)
//!
//! (0,0,0,0) --a=1--> (2,0,0,0) --a=2--> (1,2,0,0) --a=4--> (1,1,0,2) --a=3--> (1,1,2,1)
//! ```
//!
//! With N orders there are `1 + N * 2^(N-1)` states; indices are assigned by
//! a deterministic enumeration, so they are identical on every run.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Builds [`TransitionTable`] rows on Rayon's pool.       |

pub mod error;
pub mod input;
pub mod mdp;
pub mod model;
pub mod space;
pub mod table;

#[cfg(test)]
mod tests;

pub use error::{MdpError, MdpResult};
pub use input::StateRef;
pub use mdp::FiniteMdp;
pub use model::{IMPOSSIBLE_TRANSITION_PENALTY, Reward, Successors, TransportationMdp};
pub use space::{MAX_ORDERS, StateSpace};
pub use table::{Transition, TransitionTable};
