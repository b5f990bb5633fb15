//! Running statistics accumulated across ticks.

/// Running totals, updated by the assignment and statistics phases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimStats {
    /// Ticks fully processed.
    pub ticks:                   u64,
    /// Sum of the settled queue length over all ticks.
    pub cumulative_queue_length: u64,
    pub max_queue_length:        usize,
    /// Customers assigned to a teller.
    pub served:                  u64,
    /// Sum of wait times over all served customers.
    pub cumulative_wait:         u64,
    pub max_wait:                u64,
}

impl SimStats {
    /// Fold one assignment with the given wait into the totals.
    pub fn record_assignment(&mut self, wait: u64) {
        self.served += 1;
        self.cumulative_wait = self.cumulative_wait.saturating_add(wait);
        self.max_wait = self.max_wait.max(wait);
    }

    /// Close a tick whose waiting line settled at `queue_length`.
    pub fn record_tick(&mut self, queue_length: usize) {
        self.ticks += 1;
        self.cumulative_queue_length += queue_length as u64;
        self.max_queue_length = self.max_queue_length.max(queue_length);
    }

    /// Mean settled queue length per tick; 0 before any tick.
    pub fn average_queue_length(&self) -> f64 {
        if self.ticks == 0 {
            return 0.0;
        }
        self.cumulative_queue_length as f64 / self.ticks as f64
    }

    /// Mean wait per served customer; exactly 0 when nobody was served.
    pub fn average_wait_time(&self) -> f64 {
        if self.served == 0 {
            return 0.0;
        }
        self.cumulative_wait as f64 / self.served as f64
    }
}
