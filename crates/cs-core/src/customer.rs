//! The customer value type.

use std::num::NonZeroU64;

use crate::Tick;

/// A customer waiting for, or receiving, service.
///
/// Immutable once created.  The service duration is non-zero by
/// construction: a duration of 0 means "no arrival this tick" and never
/// produces a `Customer`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    service_ticks: NonZeroU64,
    arrived_at:    Tick,
}

impl Customer {
    pub fn new(service_ticks: NonZeroU64, arrived_at: Tick) -> Self {
        Self { service_ticks, arrived_at }
    }

    /// Build a customer from a raw duration, returning `None` for the
    /// "no arrival" sentinel 0.
    #[inline]
    pub fn arriving(service_ticks: u64, arrived_at: Tick) -> Option<Self> {
        NonZeroU64::new(service_ticks).map(|d| Self::new(d, arrived_at))
    }

    /// Ticks of teller time this customer needs once assigned.
    #[inline]
    pub fn service_ticks(&self) -> u64 {
        self.service_ticks.get()
    }

    #[inline]
    pub fn arrived_at(&self) -> Tick {
        self.arrived_at
    }

    /// Ticks spent in the waiting line if assigned at `now`.
    #[inline]
    pub fn wait_time(&self, now: Tick) -> u64 {
        now.since(self.arrived_at)
    }
}
