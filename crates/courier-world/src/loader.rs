//! CSV house-table loader.
//!
//! # CSV format
//!
//! One row per house:
//!
//! ```csv
//! house_id,x,y
//! 0,1200.0,-340.5
//! 1,80.0,2250.0
//! 2,-910.0,66.0
//! ```
//!
//! Duplicate `house_id` rows are rejected — a silently-moved house would
//! change every distance the scheduler computes.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use courier_core::{HouseId, Point};

use crate::{HouseTable, WorldError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HouseRecord {
    house_id: u32,
    x:        f32,
    y:        f32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`HouseTable`] from a CSV file.
pub fn load_houses_csv(path: &Path) -> Result<HouseTable, WorldError> {
    let file = std::fs::File::open(path).map_err(WorldError::Io)?;
    load_houses_reader(file)
}

/// Like [`load_houses_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from embedded
/// data.
pub fn load_houses_reader<R: Read>(reader: R) -> Result<HouseTable, WorldError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut table = HouseTable::new();

    for result in csv_reader.deserialize::<HouseRecord>() {
        let row = result.map_err(|e| WorldError::Parse(e.to_string()))?;
        let house = HouseId(row.house_id);
        if table.contains(house) {
            return Err(WorldError::Parse(format!(
                "duplicate house_id {}",
                row.house_id
            )));
        }
        table.insert(house, Point::new(row.x, row.y));
    }

    Ok(table)
}
