//! Unit tests for cs-service.

use cs_core::{Customer, TellerId, Tick};

fn customer(service: u64, arrived: u64) -> Customer {
    Customer::arriving(service, Tick(arrived)).unwrap()
}

// ── Teller ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod teller {
    use super::*;
    use crate::{ServiceError, Teller, TellerStatus};

    #[test]
    fn starts_free() {
        let t = Teller::new(TellerId(0));
        assert!(!t.is_busy());
        assert_eq!(t.status(), TellerStatus::Free);
        assert_eq!(t.available_at(), Tick::ZERO);
    }

    #[test]
    fn assign_sets_busy_until() {
        let mut t = Teller::new(TellerId(0));
        let until = t.assign(customer(5, 1), Tick(1)).unwrap();
        assert_eq!(until, Tick(6));
        assert!(t.is_busy());
        assert_eq!(t.status(), TellerStatus::BusyUntil(Tick(6)));
        assert_eq!(t.customers_served(), 1);
        assert_eq!(t.service_ticks(), 5);
    }

    #[test]
    fn assign_while_busy_is_rejected() {
        let mut t = Teller::new(TellerId(2));
        t.assign(customer(5, 1), Tick(1)).unwrap();
        let err = t.assign(customer(1, 1), Tick(1)).unwrap_err();
        assert_eq!(err, ServiceError::TellerBusy(TellerId(2)));
        // The first customer is still the one being served.
        assert_eq!(t.customer().unwrap().service_ticks(), 5);
        assert_eq!(t.available_at(), Tick(6));
        assert_eq!(t.customers_served(), 1);
    }

    #[test]
    fn assign_past_last_tick_is_rejected() {
        let mut t = Teller::new(TellerId(1));
        let err = t.assign(customer(u64::MAX, 1), Tick(3)).unwrap_err();
        assert_eq!(
            err,
            ServiceError::TickOverflow { teller: TellerId(1), now: 3, service_ticks: u64::MAX }
        );
        assert!(!t.is_busy());
        assert_eq!(t.available_at(), Tick::ZERO);
        assert_eq!(t.customers_served(), 0);
    }

    #[test]
    fn release_before_busy_until_is_noop() {
        let mut t = Teller::new(TellerId(0));
        t.assign(customer(5, 1), Tick(1)).unwrap();
        assert!(t.release(Tick(5)).is_none());
        assert!(t.is_busy());
    }

    #[test]
    fn release_at_busy_until_frees() {
        let mut t = Teller::new(TellerId(0));
        t.assign(customer(5, 1), Tick(1)).unwrap();
        let released = t.release(Tick(6)).unwrap();
        assert_eq!(released.service_ticks(), 5);
        assert!(!t.is_busy());
        // available_at keeps the last value for display.
        assert_eq!(t.available_at(), Tick(6));
    }

    #[test]
    fn release_after_busy_until_frees() {
        let mut t = Teller::new(TellerId(0));
        t.assign(customer(2, 1), Tick(1)).unwrap();
        assert!(t.release(Tick(10)).is_some());
    }

    #[test]
    fn release_is_idempotent() {
        let mut t = Teller::new(TellerId(0));
        assert!(t.release(Tick(1)).is_none());
        t.assign(customer(1, 1), Tick(1)).unwrap();
        assert!(t.release(Tick(2)).is_some());
        assert!(t.release(Tick(2)).is_none());
        assert!(!t.is_busy());
    }

    #[test]
    fn status_display() {
        assert_eq!(TellerStatus::Free.to_string(), "free");
        assert_eq!(TellerStatus::BusyUntil(Tick(6)).to_string(), "busy until 6");
    }
}

// ── WaitingQueue ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod waiting_queue {
    use super::*;
    use crate::{ServiceError, WaitingQueue};

    #[test]
    fn new_is_empty() {
        let q = WaitingQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
        assert!(q.front().is_none());
    }

    #[test]
    fn front_is_next_to_leave() {
        let mut q = WaitingQueue::new();
        q.enqueue(customer(3, 1));
        q.enqueue(customer(8, 2));
        assert_eq!(q.front().unwrap().service_ticks(), 3);
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn dequeue_empty_errors() {
        let mut q = WaitingQueue::new();
        assert_eq!(q.dequeue().unwrap_err(), ServiceError::EmptyQueue);
    }

    #[test]
    fn fifo_order() {
        let mut q = WaitingQueue::new();
        q.enqueue(customer(3, 1));
        q.enqueue(customer(7, 2));
        q.enqueue(customer(1, 3));
        assert_eq!(q.len(), 3);
        assert_eq!(q.durations(), vec![3, 7, 1]);

        assert_eq!(q.dequeue().unwrap().arrived_at(), Tick(1));
        assert_eq!(q.dequeue().unwrap().arrived_at(), Tick(2));
        q.enqueue(customer(4, 4));
        assert_eq!(q.dequeue().unwrap().arrived_at(), Tick(3));
        assert_eq!(q.dequeue().unwrap().arrived_at(), Tick(4));
        assert!(q.is_empty());
    }
}
