//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use cs_sim::{FinalReport, SimObserver, Snapshot, TickResult};

use crate::row::{TellerSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes teller snapshots, tick summaries, and the
/// final report to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::warn!(error = %e, "output write failed; later errors are dropped");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, result: &TickResult) {
        let row = TickSummaryRow {
            tick:         result.tick.0,
            arrival:      result.arrival.unwrap_or(0),
            released:     result.released.len() as u64,
            assigned:     result.assignments.len() as u64,
            queue_length: result.queue_length as u64,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        let rows: Vec<TellerSnapshotRow> = snapshot
            .tellers
            .iter()
            .map(|t| TellerSnapshotRow {
                tick:         snapshot.tick.0,
                teller:       t.id.number(),
                busy:         t.status.is_busy(),
                available_at: t.available_at.0,
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, report: &FinalReport) {
        let result = self.writer.write_report(report);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
