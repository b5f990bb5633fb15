//! Simulation observer trait for progress reporting and data collection.

use cs_core::Tick;

use crate::{FinalReport, Snapshot, TickResult};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, result: &TickResult) {
///         println!("tick {}: {} waiting", result.tick, result.queue_length);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after all four phases of a tick have completed.
    fn on_tick_end(&mut self, _result: &TickResult) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks), after `on_tick_end`.
    fn on_snapshot(&mut self, _snapshot: &Snapshot) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _report: &FinalReport) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
