//! End-of-run report.

use cs_core::TellerId;

/// Per-teller totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TellerReport {
    pub id:               TellerId,
    pub customers_served: u64,
    /// Ticks of service assigned to this teller.
    pub service_ticks:    u64,
}

/// Aggregated statistics for a whole run.
///
/// Averages are exact ratios of the running totals; formatting (e.g. two
/// decimals) is left to the caller.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FinalReport {
    pub ticks:            u64,
    pub teller_count:     usize,
    pub served_count:     u64,
    pub avg_queue_length: f64,
    pub max_queue_length: usize,
    /// 0 when nobody was served.
    pub avg_wait_time:    f64,
    pub max_wait_time:    u64,
    pub tellers:          Vec<TellerReport>,
}
