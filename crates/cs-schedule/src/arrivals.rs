//! Arrival sources.

use std::collections::BTreeMap;

use cs_core::Tick;

use crate::{ScheduleError, ScheduleResult};

/// Supplies the arrival for each tick of a run.
///
/// `arrival_at` is called exactly once per tick, in increasing tick order.
/// It returns the service duration of the customer arriving at `tick`, or 0
/// when nobody arrives.
pub trait ArrivalSource {
    fn arrival_at(&mut self, tick: Tick) -> u64;
}

impl<S: ArrivalSource + ?Sized> ArrivalSource for &mut S {
    fn arrival_at(&mut self, tick: Tick) -> u64 {
        (**self).arrival_at(tick)
    }
}

/// A fixed, pre-recorded list of arrivals keyed by tick.
///
/// Ticks with no entry have no arrival.  Zero durations are accepted on
/// input but never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrivalScript {
    inner: BTreeMap<Tick, u64>,
}

impl ArrivalScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a script from per-tick durations: the first element is tick 1,
    /// the second tick 2, and so on.  Zeros mean "no arrival".
    pub fn from_durations<I: IntoIterator<Item = u64>>(durations: I) -> Self {
        let inner = durations
            .into_iter()
            .enumerate()
            .filter(|&(_, d)| d > 0)
            .map(|(i, d)| (Tick(i as u64 + 1), d))
            .collect();
        Self { inner }
    }

    /// Record an arrival of `service_ticks` at `tick`.
    ///
    /// Rejects tick 0, a second arrival at a tick that already has one, and
    /// a duration whose end tick would not fit in a `u64`.  A zero duration
    /// is a no-op.
    pub fn insert(&mut self, tick: Tick, service_ticks: u64) -> ScheduleResult<()> {
        if tick == Tick::ZERO {
            return Err(ScheduleError::TickZero);
        }
        if self.inner.contains_key(&tick) {
            return Err(ScheduleError::DuplicateTick(tick));
        }
        if tick.checked_add(service_ticks).is_none() {
            return Err(ScheduleError::EndsPastLastTick { tick, service_ticks });
        }
        if service_ticks > 0 {
            self.inner.insert(tick, service_ticks);
        }
        Ok(())
    }

    /// The duration arriving at `tick`, or 0.
    pub fn get(&self, tick: Tick) -> u64 {
        self.inner.get(&tick).copied().unwrap_or(0)
    }

    /// Number of actual arrivals (non-zero durations).
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Last tick with an arrival, if any.
    pub fn last_tick(&self) -> Option<Tick> {
        self.inner.keys().next_back().copied()
    }

    /// Arrivals within the first `total_ticks` ticks of a run.
    pub fn arrivals_within(&self, total_ticks: u64) -> usize {
        if total_ticks == 0 {
            return 0;
        }
        self.inner.range(Tick::FIRST..=Tick(total_ticks)).count()
    }

    /// `(tick, duration)` pairs in tick order.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, u64)> + '_ {
        self.inner.iter().map(|(&t, &d)| (t, d))
    }
}

impl ArrivalSource for ArrivalScript {
    fn arrival_at(&mut self, tick: Tick) -> u64 {
        self.get(tick)
    }
}
