//! CSV arrival loader.
//!
//! # CSV format
//!
//! One row per tick that has an arrival.  Rows need not be sorted.
//!
//! ```csv
//! tick,service_ticks
//! 1,5
//! 2,3
//! 4,0
//! 7,2
//! ```
//!
//! `service_ticks = 0` is allowed and means "no arrival", matching the
//! interactive driver.  Ticks absent from the file have no arrival.  A tick
//! of 0, the same tick on two rows, or a service that would end past tick
//! `u64::MAX` is an error.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use cs_core::Tick;

use crate::{ArrivalScript, ScheduleError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ArrivalRecord {
    tick:          u64,
    service_ticks: u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load an [`ArrivalScript`] from a CSV file.
pub fn load_arrivals_csv(path: &Path) -> Result<ArrivalScript, ScheduleError> {
    let file = std::fs::File::open(path)
        .map_err(ScheduleError::Io)?;
    load_arrivals_reader(file)
}

/// Like [`load_arrivals_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or reading from stdin.
pub fn load_arrivals_reader<R: Read>(reader: R) -> Result<ArrivalScript, ScheduleError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut script = ArrivalScript::new();
    let mut seen: HashSet<u64> = HashSet::new();
    let mut rows = 0usize;

    for result in csv_reader.deserialize::<ArrivalRecord>() {
        let row = result.map_err(|e| ScheduleError::Parse(e.to_string()))?;
        if !seen.insert(row.tick) {
            return Err(ScheduleError::DuplicateTick(Tick(row.tick)));
        }
        script.insert(Tick(row.tick), row.service_ticks)?;
        rows += 1;
    }

    tracing::debug!(rows, arrivals = script.len(), "loaded arrival script");
    Ok(script)
}
