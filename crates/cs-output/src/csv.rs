//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `teller_snapshots.csv`
//! - `tick_summaries.csv`
//! - `final_report.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use cs_sim::FinalReport;

use crate::{OutputResult, TellerSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    report:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("teller_snapshots.csv"))?;
        snapshots.write_record(["tick", "teller", "busy", "available_at"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "arrival", "released", "assigned", "queue_length"])?;

        let mut report = Writer::from_path(dir.join("final_report.csv"))?;
        report.write_record([
            "ticks",
            "teller_count",
            "served_count",
            "avg_queue_length",
            "max_queue_length",
            "avg_wait_time",
            "max_wait_time",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            report,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[TellerSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.teller.to_string(),
                (row.busy as u8).to_string(),
                row.available_at.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.arrival.to_string(),
            row.released.to_string(),
            row.assigned.to_string(),
            row.queue_length.to_string(),
        ])?;
        Ok(())
    }

    fn write_report(&mut self, report: &FinalReport) -> OutputResult<()> {
        self.report.write_record(&[
            report.ticks.to_string(),
            report.teller_count.to_string(),
            report.served_count.to_string(),
            format!("{:.2}", report.avg_queue_length),
            report.max_queue_length.to_string(),
            format!("{:.2}", report.avg_wait_time),
            report.max_wait_time.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        self.report.flush()?;
        Ok(())
    }
}
