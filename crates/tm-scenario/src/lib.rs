//! `tm-scenario` — loading a [`ModelConfig`][tm_core::ModelConfig] from disk.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`json`]   | `load_scenario_json`, `load_scenario_reader`               |
//! | [`csv`]    | `load_orders_csv`, `load_orders_reader`                    |
//! | [`error`]  | `ScenarioError`, `ScenarioResult<T>`                       |
//!
//! Loaders only parse.  Cross-reference checks (every order names a known
//! passenger and location) happen when the model is built, in
//! `tm_mdp::TransportationMdp::new`.

pub mod csv;
pub mod error;
pub mod json;


pub use crate::csv::{load_orders_csv, load_orders_reader};
pub use error::{ScenarioError, ScenarioResult};
pub use json::{load_scenario_json, load_scenario_reader};
