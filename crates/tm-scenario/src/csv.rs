//! CSV order books.
//!
//! # CSV format
//!
//! One row per order, in service-slot order:
//!
//! ```csv
//! passenger,pickup_x,pickup_y,destination,dropoff_x,dropoff_y
//! A,1,2,X,3,3
//! B,4,1,Y,0,5
//! ```
//!
//! Passenger and destination keys may repeat across rows (one passenger
//! with two trips, two passengers to the same place) as long as every
//! occurrence carries the same coordinates.  Destination keys are compared
//! case-insensitively, matching how the model resolves them.
//!
//! The driver start point is not part of the file; the caller supplies it.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use tm_core::{GridPoint, ModelConfig};

use crate::{ScenarioError, ScenarioResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct OrderRecord {
    passenger:   String,
    pickup_x:    i32,
    pickup_y:    i32,
    destination: String,
    dropoff_x:   i32,
    dropoff_y:   i32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an order book from a CSV file.
pub fn load_orders_csv(path: &Path, driver_start_point: GridPoint) -> ScenarioResult<ModelConfig> {
    let file = std::fs::File::open(path)?;
    load_orders_reader(file, driver_start_point)
}

/// Like [`load_orders_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding the order
/// book in a binary.
pub fn load_orders_reader<R: Read>(
    reader: R,
    driver_start_point: GridPoint,
) -> ScenarioResult<ModelConfig> {
    let mut csv_reader = ::csv::Reader::from_reader(reader);
    let mut config = ModelConfig::new(driver_start_point);

    for result in csv_reader.deserialize::<OrderRecord>() {
        let row = result.map_err(|e| ScenarioError::Parse(e.to_string()))?;

        let pickup = GridPoint::new(row.pickup_x, row.pickup_y);
        let dropoff = GridPoint::new(row.dropoff_x, row.dropoff_y);
        let location = row.destination.to_lowercase();

        place(&mut config.passengers, "passenger", &row.passenger, pickup)?;
        place(&mut config.locations, "location", &location, dropoff)?;

        config = config.order(row.passenger, row.destination);
    }

    debug!(orders = config.destinations.len(), "order book loaded");
    Ok(config)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn place(
    points: &mut BTreeMap<String, GridPoint>,
    kind:   &'static str,
    key:    &str,
    at:     GridPoint,
) -> ScenarioResult<()> {
    match points.get(key) {
        Some(&first) if first != at => Err(ScenarioError::ConflictingPoint {
            kind,
            key: key.to_owned(),
            first,
            second: at,
        }),
        Some(_) => Ok(()),
        None => {
            points.insert(key.to_owned(), at);
            Ok(())
        }
    }
}
