//! JSON scenario files.
//!
//! # Format
//!
//! ```json
//! {
//!   "driver_start_point": [0, 0],
//!   "destinations": [["A", "X"], ["B", "Y"]],
//!   "passengers":   { "A": [1, 2], "B": [4, 1] },
//!   "locations":    { "x": [3, 3], "y": [0, 5] }
//! }
//! ```
//!
//! Points are `[x, y]` arrays; each destination is a `[passenger, location]`
//! pair, in slot order.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use tm_core::ModelConfig;

use crate::{ScenarioError, ScenarioResult};

/// Load a scenario from a JSON file.
pub fn load_scenario_json(path: &Path) -> ScenarioResult<ModelConfig> {
    let file = std::fs::File::open(path)?;
    load_scenario_reader(file)
}

/// Like [`load_scenario_json`] but accepts any `Read` source.
pub fn load_scenario_reader<R: Read>(reader: R) -> ScenarioResult<ModelConfig> {
    let config: ModelConfig =
        serde_json::from_reader(reader).map_err(|e| ScenarioError::Parse(e.to_string()))?;
    debug!(
        orders = config.destinations.len(),
        passengers = config.passengers.len(),
        locations = config.locations.len(),
        "scenario loaded"
    );
    Ok(config)
}
