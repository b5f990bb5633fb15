//! Property tests for the engine and the waiting line over generated arrival
//! sequences.

use cs_core::{Customer, TellerId, Tick};
use cs_service::{TellerStatus, WaitingQueue};
use cs_sim::{Sim, Snapshot, TickResult};
use proptest::prelude::*;

fn arrivals_strategy() -> impl Strategy<Value = Vec<u64>> {
    // Zero is weighted up so runs mix busy and idle ticks.
    prop::collection::vec(prop_oneof![2 => Just(0u64), 3 => 1u64..8], 1..60)
}

/// Tellers that are free once the release phase of `now` has run, given the
/// snapshot taken at the end of the previous tick.
fn free_after_release(prev: &Snapshot, now: Tick) -> Vec<TellerId> {
    prev.tellers
        .iter()
        .filter(|t| match t.status {
            TellerStatus::Free => true,
            TellerStatus::BusyUntil(until) => now >= until,
        })
        .map(|t| t.id)
        .collect()
}

fn run(tellers: usize, arrivals: &[u64]) -> (Sim, Vec<(Snapshot, TickResult)>) {
    let mut sim = Sim::new(tellers).unwrap();
    let mut steps = Vec::with_capacity(arrivals.len());
    for (i, &d) in arrivals.iter().enumerate() {
        let before = sim.snapshot();
        let result = sim.tick(Tick(i as u64 + 1), d).unwrap();
        steps.push((before, result));
    }
    (sim, steps)
}

proptest! {
    #[test]
    fn fifo_law(durations in prop::collection::vec(1u64..100, 0..50)) {
        let mut q = WaitingQueue::new();
        for (i, &d) in durations.iter().enumerate() {
            q.enqueue(Customer::arriving(d, Tick(i as u64 + 1)).unwrap());
        }
        let mut out = Vec::new();
        while !q.is_empty() {
            out.push(q.dequeue().unwrap());
        }
        let ticks: Vec<u64> = out.iter().map(|c| c.arrived_at().0).collect();
        let expected: Vec<u64> = (1..=durations.len() as u64).collect();
        prop_assert_eq!(ticks, expected);
        let got: Vec<u64> = out.iter().map(|c| c.service_ticks()).collect();
        prop_assert_eq!(got, durations);
    }

    #[test]
    fn served_never_exceeds_arrivals(tellers in 1usize..5, arrivals in arrivals_strategy()) {
        let (sim, steps) = run(tellers, &arrivals);
        let arrived = arrivals.iter().filter(|&&d| d > 0).count() as u64;
        let report = sim.final_report();
        prop_assert!(report.served_count <= arrived);
        // Everyone who arrived is either served or still waiting.
        let last = &steps.last().unwrap().1;
        prop_assert_eq!(report.served_count + last.queue_length as u64, arrived);
        prop_assert!(!sim.is_aborted());
    }

    #[test]
    fn assignments_go_to_lowest_free_tellers(tellers in 1usize..5, arrivals in arrivals_strategy()) {
        let (_, steps) = run(tellers, &arrivals);
        for (prev, result) in &steps {
            let free = free_after_release(prev, result.tick);
            let waiting = prev.queue_length() + usize::from(result.arrival.is_some());
            let k = free.len().min(waiting);
            let assigned: Vec<TellerId> = result.assignments.iter().map(|a| a.teller).collect();
            // Only tellers that were free get customers, lowest index first,
            // and no teller is assigned twice in a tick.
            prop_assert_eq!(assigned, free[..k].to_vec());
        }
    }

    #[test]
    fn busy_until_is_tick_plus_duration(tellers in 1usize..5, arrivals in arrivals_strategy()) {
        let (_, steps) = run(tellers, &arrivals);
        for (_, result) in &steps {
            for a in &result.assignments {
                prop_assert_eq!(a.busy_until, result.tick.checked_add(a.service_ticks).unwrap());
            }
        }
    }

    #[test]
    fn average_wait_zero_iff_nobody_waited(tellers in 1usize..5, arrivals in arrivals_strategy()) {
        let (sim, _) = run(tellers, &arrivals);
        let report = sim.final_report();
        if report.served_count == 0 {
            prop_assert_eq!(report.avg_wait_time, 0.0);
        }
        prop_assert_eq!(report.avg_wait_time == 0.0, report.max_wait_time == 0);
    }

    #[test]
    fn runs_are_deterministic(tellers in 1usize..5, arrivals in arrivals_strategy()) {
        let (a, steps_a) = run(tellers, &arrivals);
        let (b, steps_b) = run(tellers, &arrivals);
        prop_assert_eq!(steps_a, steps_b);
        prop_assert_eq!(a.final_report(), b.final_report());
    }
}
