//! Read-only views of the engine, produced per tick for display and output.

use cs_core::{TellerId, Tick};
use cs_service::TellerStatus;

/// One customer handed to a teller during the assignment phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub teller:        TellerId,
    pub service_ticks: u64,
    /// Ticks the customer spent in the waiting line.
    pub wait_ticks:    u64,
    pub busy_until:    Tick,
}

/// What happened during one call to [`Sim::tick`][crate::Sim::tick].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickResult {
    pub tick:         Tick,
    /// Tellers that finished a customer in the release phase, in index order.
    pub released:     Vec<TellerId>,
    /// Service duration of the customer who arrived, if any.
    pub arrival:      Option<u64>,
    /// Assignments in the order they were made (ascending teller index).
    pub assignments:  Vec<Assignment>,
    /// Waiting-line length after assignment settled.
    pub queue_length: usize,
}

/// One teller as seen in a [`Snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TellerSnapshot {
    pub id:           TellerId,
    pub status:       TellerStatus,
    /// Tick of the most recent busy-until, kept after release.
    pub available_at: Tick,
}

/// The counter at the end of a tick.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    /// Last processed tick (`Tick::ZERO` before the first).
    pub tick:    Tick,
    pub tellers: Vec<TellerSnapshot>,
    /// Service durations of the waiting customers, head first.
    pub queue:   Vec<u64>,
}

impl Snapshot {
    #[inline]
    pub fn queue_length(&self) -> usize {
        self.queue.len()
    }

    pub fn busy_count(&self) -> usize {
        self.tellers.iter().filter(|t| t.status.is_busy()).count()
    }
}
