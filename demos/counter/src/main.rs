//! counter: driver for the counter_sim service counter simulator.
//!
//! Runs a counter with N tellers for M minutes.  Arrivals come either from a
//! CSV script (`--arrivals`) or, minute by minute, from the terminal.  Any
//! run length or teller count not given on the command line is prompted
//! for.  Logging goes to stderr and is controlled with `RUST_LOG`.

mod cli;
mod console;
mod driver;
mod prompt;


use std::io;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cs_core::SimConfig;
use cs_output::{CsvWriter, SimOutputObserver};
use cs_schedule::{ArrivalScript, load_arrivals_csv};
use cs_sim::Sim;

use cli::Cli;
use console::ConsoleObserver;
use driver::run_interactive;
use prompt::Prompter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout(), io::stderr());

    let script = match cli.arrivals.as_deref() {
        Some(path) => Some(
            load_arrivals_csv(path)
                .with_context(|| format!("loading arrivals from {}", path.display()))?,
        ),
        None => None,
    };

    // ── Configuration ─────────────────────────────────────────────────────
    let scripted_ticks = script
        .as_ref()
        .and_then(ArrivalScript::last_tick)
        .map(|t| t.0);
    if (cli.ticks.is_none() && scripted_ticks.is_none()) || cli.tellers.is_none() {
        println!("--------------- SETUP SIMULATION ENVIRONMENT ---------------");
    }
    let total_ticks = match cli.ticks.or(scripted_ticks) {
        Some(t) => t,
        None => prompter.ask(
            "Input simulation length (min): ",
            1,
            "The simulation length must be ≥ 1.",
        )?,
    };
    let tellers = match cli.tellers {
        Some(n) => n,
        None => prompter.ask("Input number of counters: ", 1, "The number of counters must be ≥ 1.")?,
    };

    let config = SimConfig {
        total_ticks,
        teller_count: usize::try_from(tellers).context("teller count does not fit in memory")?,
        snapshot_interval_ticks: cli.snapshot_interval,
    };
    config.validate()?;
    tracing::debug!(?config, "configuration assembled");

    // ── Output ────────────────────────────────────────────────────────────
    let csv = match cli.output.as_deref() {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating output directory {}", dir.display()))?;
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("opening CSV output in {}", dir.display()))?;
            Some(SimOutputObserver::new(writer))
        }
        None => None,
    };

    // ── Run ───────────────────────────────────────────────────────────────
    let mut sim = Sim::from_config(&config)?;
    println!();
    println!("--------------- START SIMULATION ---------------");
    println!();

    let mut observer = match script {
        Some(script) => {
            if script.arrivals_within(total_ticks) < script.len() {
                tracing::warn!(
                    total_ticks,
                    scripted = script.len(),
                    "arrival script extends past the end of the run; later arrivals are ignored"
                );
            }
            let mut observer = ConsoleObserver::new(io::stdout(), false, csv);
            sim.run(&config, script, &mut observer)?;
            observer
        }
        None => {
            let mut observer = ConsoleObserver::new(io::stdout(), true, csv);
            run_interactive(&mut sim, &config, &mut prompter, &mut observer)?;
            observer
        }
    };

    if let Some(e) = observer.take_error() {
        return Err(e).context("writing to the console");
    }
    if let Some(e) = observer.take_output_error() {
        bail!("writing CSV output: {e}");
    }
    Ok(())
}
