//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is one
//! simulated minute at the counter.  Ticks are numbered from 1: the first
//! processed tick is `Tick::FIRST`, and `Tick::ZERO` only appears as the
//! "never" value of a teller that has not served anyone yet.
//!
//! Integer ticks keep all service arithmetic exact:
//!
//!   busy_until = assigned_at + service_ticks
//!   wait_time  = assigned_at - arrived_at

use std::fmt;

use crate::{CsError, CsResult};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The first tick of every run.
    pub const FIRST: Tick = Tick(1);

    /// The tick `n` steps after `self`, or `None` past `u64::MAX`.
    #[inline]
    pub fn checked_add(self, n: u64) -> Option<Tick> {
        self.0.checked_add(n).map(Tick)
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Assembled by the driver (command-line flags or interactive prompts) and
/// passed to the simulation runner.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.  The run covers ticks `1..=total_ticks`.
    pub total_ticks: u64,

    /// Number of tellers at the counter.  Must be at least 1.
    pub teller_count: usize,

    /// Emit a snapshot every N ticks.  1 = every tick; 0 disables snapshots.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// A config that snapshots every tick.
    pub fn new(total_ticks: u64, teller_count: usize) -> Self {
        Self {
            total_ticks,
            teller_count,
            snapshot_interval_ticks: 1,
        }
    }

    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> CsResult<()> {
        if self.total_ticks < 1 {
            return Err(CsError::Config(
                "the simulation length must be at least 1 tick".into(),
            ));
        }
        if self.teller_count < 1 {
            return Err(CsError::Config(
                "the number of tellers must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// The last tick of the run (inclusive).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Every tick of the run, in order.
    pub fn ticks(&self) -> impl Iterator<Item = Tick> {
        (Tick::FIRST.0..=self.total_ticks).map(Tick)
    }

    /// Whether a snapshot should be emitted after `tick`.
    #[inline]
    pub fn is_snapshot_tick(&self, tick: Tick) -> bool {
        self.snapshot_interval_ticks > 0 && tick.0.is_multiple_of(self.snapshot_interval_ticks)
    }
}
