//! The `Sim` struct and its tick loop.

use cs_core::{Customer, SimConfig, TellerId, Tick};
use cs_schedule::ArrivalSource;
use cs_service::{ServiceError, Teller, WaitingQueue};

use crate::{
    Assignment, FinalReport, SimError, SimObserver, SimResult, SimStats, Snapshot,
    TellerReport, TellerSnapshot, TickResult,
};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The simulation engine.
///
/// `Sim` owns the tellers, the waiting line and the running statistics, and
/// is the only thing that ever mutates them.  Each call to [`tick`][Self::tick]
/// runs the four phases in order:
///
/// 1. **Release**: every teller, in index order, frees itself if the tick has
///    reached its busy-until tick.
/// 2. **Arrival**: a non-zero duration enqueues a new customer.
/// 3. **Assignment**: waiting customers go to free tellers, lowest index
///    first, in FIFO order.
/// 4. **Statistics**: the settled queue length is recorded.
///
/// Ticks must be supplied in strictly increasing order starting from 1.
pub struct Sim {
    tellers:   Vec<Teller>,
    queue:     WaitingQueue,
    stats:     SimStats,
    /// Last fully processed tick (`Tick::ZERO` before the first).
    last_tick: Tick,
    /// Set after an invariant violation; every later tick is refused.
    aborted:   bool,
}

impl Sim {
    /// Create an engine with `teller_count` tellers, all free.
    pub fn new(teller_count: usize) -> SimResult<Self> {
        if teller_count < 1 {
            return Err(SimError::config("the number of tellers must be at least 1"));
        }
        let tellers = (0..teller_count)
            .map(|i| {
                TellerId::try_from(i)
                    .map(Teller::new)
                    .map_err(|_| SimError::config(format!("too many tellers: {teller_count}")))
            })
            .collect::<SimResult<Vec<_>>>()?;

        Ok(Self {
            tellers,
            queue:     WaitingQueue::new(),
            stats:     SimStats::default(),
            last_tick: Tick::ZERO,
            aborted:   false,
        })
    }

    /// Validate `config` and create an engine sized for it.
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        Self::new(config.teller_count)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn teller_count(&self) -> usize {
        self.tellers.len()
    }

    pub fn tellers(&self) -> &[Teller] {
        &self.tellers
    }

    pub fn queue(&self) -> &WaitingQueue {
        &self.queue
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Last fully processed tick (`Tick::ZERO` before the first).
    pub fn current_tick(&self) -> Tick {
        self.last_tick
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Process tick `now`, with a customer needing `arrival` ticks of service
    /// arriving (0 for no arrival).
    ///
    /// Fails with [`SimError::Config`] if `now` is 0, not after the previous
    /// tick, or too close to `u64::MAX` for an `arrival` of that length to
    /// end on a representable tick; nothing is changed in that case.  Fails with
    /// [`SimError::Invariant`] if the assignment scan breaks a teller or
    /// queue precondition, after which the engine is aborted.
    pub fn tick(&mut self, now: Tick, arrival: u64) -> SimResult<TickResult> {
        if self.aborted {
            return Err(SimError::Aborted);
        }
        if now == Tick::ZERO {
            return Err(SimError::config("ticks are numbered from 1"));
        }
        if now <= self.last_tick {
            return Err(SimError::config(format!(
                "tick {} does not follow tick {}",
                now.0, self.last_tick.0
            )));
        }
        if now.checked_add(arrival).is_none() {
            return Err(SimError::config(format!(
                "service duration {arrival} starting at tick {} ends past the last tick",
                now.0
            )));
        }
        tracing::trace!(tick = now.0, arrival, "tick start");

        // ── Phase 1: release finished customers ───────────────────────────
        let mut released = Vec::new();
        for teller in &mut self.tellers {
            if teller.release(now).is_some() {
                tracing::debug!(tick = now.0, teller = teller.id().0, "teller released customer");
                released.push(teller.id());
            }
        }

        // ── Phase 2: arrival ──────────────────────────────────────────────
        let arrived = Customer::arriving(arrival, now);
        if let Some(customer) = arrived {
            tracing::debug!(tick = now.0, service_ticks = arrival, "customer arrived");
            self.queue.enqueue(customer);
        }

        // ── Phase 3: assignment ───────────────────────────────────────────
        let assignments =
            match assign_waiting(&mut self.tellers, &mut self.queue, &mut self.stats, now) {
                Ok(a) => a,
                Err(source) => return Err(self.abort(now, source)),
            };

        // ── Phase 4: statistics ───────────────────────────────────────────
        let queue_length = self.queue.len();
        self.stats.record_tick(queue_length);
        self.last_tick = now;

        Ok(TickResult {
            tick: now,
            released,
            arrival: arrived.map(|c| c.service_ticks()),
            assignments,
            queue_length,
        })
    }

    /// The counter as of the last processed tick.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick:    self.last_tick,
            tellers: self
                .tellers
                .iter()
                .map(|t| TellerSnapshot {
                    id:           t.id(),
                    status:       t.status(),
                    available_at: t.available_at(),
                })
                .collect(),
            queue:   self.queue.durations(),
        }
    }

    /// Aggregated statistics over every tick processed so far.
    pub fn final_report(&self) -> FinalReport {
        FinalReport {
            ticks:            self.stats.ticks,
            teller_count:     self.tellers.len(),
            served_count:     self.stats.served,
            avg_queue_length: self.stats.average_queue_length(),
            max_queue_length: self.stats.max_queue_length,
            avg_wait_time:    self.stats.average_wait_time(),
            max_wait_time:    self.stats.max_wait,
            tellers:          self
                .tellers
                .iter()
                .map(|t| TellerReport {
                    id:               t.id(),
                    customers_served: t.customers_served(),
                    service_ticks:    t.service_ticks(),
                })
                .collect(),
        }
    }

    /// Run from the tick after the current one through `config.end_tick()`,
    /// pulling one arrival per tick from `arrivals`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<A, O>(
        &mut self,
        config:       &SimConfig,
        mut arrivals: A,
        observer:     &mut O,
    ) -> SimResult<FinalReport>
    where
        A: ArrivalSource,
        O: SimObserver,
    {
        config.validate()?;
        if config.teller_count != self.tellers.len() {
            return Err(SimError::config(format!(
                "config has {} tellers but the engine has {}",
                config.teller_count,
                self.tellers.len()
            )));
        }
        tracing::info!(
            total_ticks = config.total_ticks,
            tellers = config.teller_count,
            "simulation start"
        );

        let first = self.last_tick.0.saturating_add(1);
        for now in (first..=config.end_tick().0).map(Tick) {
            observer.on_tick_start(now);
            let arrival = arrivals.arrival_at(now);
            let result = self.tick(now, arrival)?;
            observer.on_tick_end(&result);
            if config.is_snapshot_tick(now) {
                observer.on_snapshot(&self.snapshot());
            }
        }

        let report = self.final_report();
        tracing::info!(
            ticks = report.ticks,
            served = report.served_count,
            max_queue_length = report.max_queue_length,
            "simulation end"
        );
        observer.on_sim_end(&report);
        Ok(report)
    }

    // ── Internals ─────────────────────────────────────────────────────────

    pub(crate) fn abort(&mut self, tick: Tick, source: ServiceError) -> SimError {
        tracing::error!(tick = tick.0, error = %source, "internal invariant violated; aborting engine");
        self.aborted = true;
        SimError::Invariant { tick, source }
    }
}

// ── Assignment phase ──────────────────────────────────────────────────────────

/// Hand waiting customers to free tellers.
///
/// One pass over the tellers in index order: each free teller takes the
/// current head of the line.  The pass stops early once the line is empty,
/// so lower-index tellers are always preferred and no teller is visited
/// twice.
fn assign_waiting(
    tellers: &mut [Teller],
    queue:   &mut WaitingQueue,
    stats:   &mut SimStats,
    now:     Tick,
) -> Result<Vec<Assignment>, ServiceError> {
    let mut assignments = Vec::new();
    for teller in tellers.iter_mut() {
        if queue.is_empty() {
            break;
        }
        if teller.is_busy() {
            continue;
        }

        let customer   = *queue.front().ok_or(ServiceError::EmptyQueue)?;
        let busy_until = teller.assign(customer, now)?;
        queue.dequeue()?;
        let wait       = customer.wait_time(now);
        stats.record_assignment(wait);

        tracing::debug!(
            tick = now.0,
            teller = teller.id().0,
            wait,
            busy_until = busy_until.0,
            "customer assigned"
        );
        assignments.push(Assignment {
            teller:        teller.id(),
            service_ticks: customer.service_ticks(),
            wait_ticks:    wait,
            busy_until,
        });
    }
    Ok(assignments)
}
