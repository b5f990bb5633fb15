//! Text rendering of snapshots and the final report.

use std::io::{self, Write};

use cs_core::Tick;
use cs_output::{CsvWriter, OutputError, SimOutputObserver};
use cs_sim::{FinalReport, SimObserver, Snapshot};

pub fn write_tick_header<W: Write>(out: &mut W, tick: Tick) -> io::Result<()> {
    writeln!(out, "At the beginning of minute {}...", tick.0)
}

pub fn write_snapshot<W: Write>(out: &mut W, snapshot: &Snapshot) -> io::Result<()> {
    writeln!(out, "After {} minute(s) ##", snapshot.tick.0)?;
    for teller in &snapshot.tellers {
        if teller.status.is_busy() || teller.available_at == Tick::ZERO {
            writeln!(out, "    {}: {}", teller.id, teller.status)?;
        } else {
            writeln!(
                out,
                "    {}: {} (last busy until {})",
                teller.id, teller.status, teller.available_at.0
            )?;
        }
    }
    let line: Vec<String> = snapshot.queue.iter().map(u64::to_string).collect();
    writeln!(out, "    Waiting Line: {}", line.join(" "))?;
    writeln!(out)
}

pub fn write_report<W: Write>(out: &mut W, report: &FinalReport) -> io::Result<()> {
    writeln!(out, "--------------- END OF SIMULATION ---------------")?;
    writeln!(out, "Total minutes simulated   : {} minute(s)", report.ticks)?;
    writeln!(out, "Number of tellers         : {} teller(s)", report.teller_count)?;
    writeln!(out, "Number of customers served: {} customer(s)", report.served_count)?;
    writeln!(out, "Average queue length      : {:.2} customer(s)", report.avg_queue_length)?;
    writeln!(out, "Maximum queue length      : {} customer(s)", report.max_queue_length)?;
    writeln!(out, "Average wait time         : {:.2} minute(s)", report.avg_wait_time)?;
    writeln!(out, "Maximum wait time         : {} minute(s)", report.max_wait_time)?;
    for teller in &report.tellers {
        writeln!(
            out,
            "    {}: {} customer(s), {} minute(s) of service",
            teller.id, teller.customers_served, teller.service_ticks
        )?;
    }
    Ok(())
}

/// Prints the run to a text stream and forwards every hook to an optional
/// CSV observer.
pub struct ConsoleObserver<W: Write> {
    out:          W,
    print_header: bool,
    csv:          Option<SimOutputObserver<CsvWriter>>,
    last_error:   Option<io::Error>,
}

impl<W: Write> ConsoleObserver<W> {
    /// `print_header` prints the "beginning of minute" line at each tick
    /// start; the interactive driver wants it right before its prompt.
    pub fn new(out: W, print_header: bool, csv: Option<SimOutputObserver<CsvWriter>>) -> Self {
        Self { out, print_header, csv, last_error: None }
    }

    /// First console write error, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    /// First CSV write error, if any.
    pub fn take_output_error(&mut self) -> Option<OutputError> {
        self.csv.as_mut().and_then(SimOutputObserver::take_error)
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> SimObserver for ConsoleObserver<W> {
    fn on_tick_start(&mut self, tick: Tick) {
        if self.print_header {
            let result = write_tick_header(&mut self.out, tick);
            self.store_err(result);
        }
        if let Some(csv) = self.csv.as_mut() {
            csv.on_tick_start(tick);
        }
    }

    fn on_tick_end(&mut self, result: &cs_sim::TickResult) {
        if let Some(csv) = self.csv.as_mut() {
            csv.on_tick_end(result);
        }
    }

    fn on_snapshot(&mut self, snapshot: &Snapshot) {
        let result = write_snapshot(&mut self.out, snapshot);
        self.store_err(result);
        if let Some(csv) = self.csv.as_mut() {
            csv.on_snapshot(snapshot);
        }
    }

    fn on_sim_end(&mut self, report: &FinalReport) {
        let result = write_report(&mut self.out, report).and_then(|()| self.out.flush());
        self.store_err(result);
        if let Some(csv) = self.csv.as_mut() {
            csv.on_sim_end(report);
        }
    }
}
