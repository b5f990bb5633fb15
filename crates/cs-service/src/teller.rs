//! Single-server teller state machine.

use std::fmt;

use cs_core::{Customer, TellerId, Tick};

use crate::{ServiceError, ServiceResult};

/// Read-only view of a teller, for display and output.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TellerStatus {
    Free,
    /// Serving a customer; becomes free at the given tick.
    BusyUntil(Tick),
}

impl TellerStatus {
    #[inline]
    pub fn is_busy(self) -> bool {
        matches!(self, TellerStatus::BusyUntil(_))
    }
}

impl fmt::Display for TellerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TellerStatus::Free         => write!(f, "free"),
            TellerStatus::BusyUntil(t) => write!(f, "busy until {}", t.0),
        }
    }
}

/// A teller serving at most one customer at a time.
///
/// A teller is **Free** (no customer) or **Busy** (exactly one customer).
/// It starts Free, is created once per run, and cycles between the two
/// states until the run ends.
///
/// `busy_until` is written only by [`assign`][Self::assign] and keeps its
/// last value after release, so [`available_at`][Self::available_at] reports
/// when the teller last became (or will become) free.
#[derive(Debug, Clone)]
pub struct Teller {
    id:               TellerId,
    customer:         Option<Customer>,
    busy_until:       Tick,
    customers_served: u64,
    service_ticks:    u64,
}

impl Teller {
    pub fn new(id: TellerId) -> Self {
        Self {
            id,
            customer:         None,
            busy_until:       Tick::ZERO,
            customers_served: 0,
            service_ticks:    0,
        }
    }

    #[inline]
    pub fn id(&self) -> TellerId {
        self.id
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.customer.is_some()
    }

    /// The customer currently being served, if any.
    #[inline]
    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// The tick at which the most recent assignment ends (`Tick::ZERO` if
    /// the teller has never served anyone).
    #[inline]
    pub fn available_at(&self) -> Tick {
        self.busy_until
    }

    /// Total customers assigned to this teller so far.
    #[inline]
    pub fn customers_served(&self) -> u64 {
        self.customers_served
    }

    /// Total ticks of service assigned to this teller so far.
    #[inline]
    pub fn service_ticks(&self) -> u64 {
        self.service_ticks
    }

    /// Let the current customer leave if their service is done at `now`.
    ///
    /// Returns the released customer.  No-op (returns `None`) when the
    /// teller is free or still serving; calling it twice in a tick is safe.
    pub fn release(&mut self, now: Tick) -> Option<Customer> {
        if self.is_busy() && now >= self.busy_until {
            return self.customer.take();
        }
        None
    }

    /// Start serving `customer` at `now`.
    ///
    /// Returns the tick at which the teller will be free again.  Fails with
    /// [`ServiceError::TellerBusy`] if a customer is already being served,
    /// or [`ServiceError::TickOverflow`] if that tick would be past
    /// `u64::MAX`; the teller is left untouched in both cases.
    pub fn assign(&mut self, customer: Customer, now: Tick) -> ServiceResult<Tick> {
        if self.is_busy() {
            return Err(ServiceError::TellerBusy(self.id));
        }
        let service_ticks = customer.service_ticks();
        self.busy_until = now.checked_add(service_ticks).ok_or(ServiceError::TickOverflow {
            teller: self.id,
            now: now.0,
            service_ticks,
        })?;
        self.customers_served += 1;
        self.service_ticks = self.service_ticks.saturating_add(service_ticks);
        self.customer = Some(customer);
        Ok(self.busy_until)
    }

    pub fn status(&self) -> TellerStatus {
        if self.is_busy() {
            TellerStatus::BusyUntil(self.busy_until)
        } else {
            TellerStatus::Free
        }
    }
}
