//! `cs-output`: simulation output writers for counter_sim.
//!
//! | Backend | Files created                                                       |
//! |---------|---------------------------------------------------------------------|
//! | CSV     | `teller_snapshots.csv`, `tick_summaries.csv`, `final_report.csv`    |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `cs_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cs_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&config, arrivals, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{TellerSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
