//! The interactive tick loop: one prompted arrival per minute.

use std::io::{BufRead, Write};

use anyhow::Result;
use cs_core::SimConfig;
use cs_sim::{FinalReport, Sim, SimObserver};

use crate::prompt::Prompter;

/// Drive `sim` through every tick of `config`, asking for each minute's
/// arrival.  Mirrors [`Sim::run`] but lets prompt failures (closed input)
/// end the run with an error.
pub fn run_interactive<R, W, E, O>(
    sim:      &mut Sim,
    config:   &SimConfig,
    prompter: &mut Prompter<R, W, E>,
    observer: &mut O,
) -> Result<FinalReport>
where
    R: BufRead,
    W: Write,
    E: Write,
    O: SimObserver,
{
    for now in config.ticks() {
        observer.on_tick_start(now);
        let arrival = prompter.ask(
            "Input serving time for a new customer: ",
            0,
            "The serving time must be ≥ 0.",
        )?;
        let result = sim.tick(now, arrival)?;
        observer.on_tick_end(&result);
        if config.is_snapshot_tick(now) {
            observer.on_snapshot(&sim.snapshot());
        }
    }

    let report = sim.final_report();
    observer.on_sim_end(&report);
    Ok(report)
}
