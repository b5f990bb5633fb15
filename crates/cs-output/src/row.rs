//! Plain data row types written by output backends.

/// One teller's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TellerSnapshotRow {
    pub tick:         u64,
    /// 1-based teller number, as shown to humans.
    pub teller:       u32,
    pub busy:         bool,
    /// Tick of the most recent busy-until; 0 if the teller never served.
    pub available_at: u64,
}

/// Summary of one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    /// Service duration of the arriving customer; 0 for no arrival.
    pub arrival:      u64,
    pub released:     u64,
    pub assigned:     u64,
    pub queue_length: u64,
}
