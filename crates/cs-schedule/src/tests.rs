//! Unit tests for cs-schedule.

use std::io::Cursor;

use cs_core::Tick;

use crate::{ArrivalScript, ArrivalSource, ScheduleError, load_arrivals_reader};

// ── ArrivalScript ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_script {
    use super::*;

    #[test]
    fn from_durations_is_one_based_and_skips_zeros() {
        let script = ArrivalScript::from_durations([5, 0, 3]);
        assert_eq!(script.len(), 2);
        assert_eq!(script.get(Tick(1)), 5);
        assert_eq!(script.get(Tick(2)), 0);
        assert_eq!(script.get(Tick(3)), 3);
        assert_eq!(script.last_tick(), Some(Tick(3)));
    }

    #[test]
    fn missing_tick_is_no_arrival() {
        let mut script = ArrivalScript::from_durations([4]);
        assert_eq!(script.arrival_at(Tick(99)), 0);
    }

    #[test]
    fn insert_rejects_tick_zero() {
        let mut script = ArrivalScript::new();
        assert!(matches!(script.insert(Tick(0), 3), Err(ScheduleError::TickZero)));
    }

    #[test]
    fn insert_rejects_duplicate() {
        let mut script = ArrivalScript::new();
        script.insert(Tick(2), 3).unwrap();
        assert!(matches!(
            script.insert(Tick(2), 1),
            Err(ScheduleError::DuplicateTick(Tick(2)))
        ));
    }

    #[test]
    fn insert_rejects_service_ending_past_last_tick() {
        let mut script = ArrivalScript::new();
        assert!(matches!(
            script.insert(Tick(2), u64::MAX),
            Err(ScheduleError::EndsPastLastTick { tick: Tick(2), service_ticks: u64::MAX })
        ));
        assert!(script.is_empty());
        script.insert(Tick(2), u64::MAX - 2).unwrap();
        assert_eq!(script.get(Tick(2)), u64::MAX - 2);
    }

    #[test]
    fn arrivals_within_counts_only_run_ticks() {
        let script = ArrivalScript::from_durations([1, 1, 0, 1, 1]);
        assert_eq!(script.arrivals_within(3), 2);
        assert_eq!(script.arrivals_within(5), 4);
        assert_eq!(script.arrivals_within(0), 0);
    }

    #[test]
    fn mut_ref_is_a_source() {
        fn first<S: ArrivalSource>(mut s: S) -> u64 {
            s.arrival_at(Tick(1))
        }
        let mut script = ArrivalScript::from_durations([7]);
        assert_eq!(first(&mut script), 7);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_rows_in_any_order() {
        let csv = "tick,service_ticks\n3,2\n1,5\n2,0\n";
        let script = load_arrivals_reader(Cursor::new(csv)).unwrap();
        assert_eq!(script.len(), 2);
        let pairs: Vec<_> = script.iter().collect();
        assert_eq!(pairs, vec![(Tick(1), 5), (Tick(3), 2)]);
    }

    #[test]
    fn header_only_is_empty() {
        let script = load_arrivals_reader(Cursor::new("tick,service_ticks\n")).unwrap();
        assert!(script.is_empty());
    }

    #[test]
    fn rejects_duplicate_ticks() {
        let csv = "tick,service_ticks\n2,1\n2,4\n";
        let err = load_arrivals_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::DuplicateTick(Tick(2))));
    }

    #[test]
    fn rejects_duplicate_zero_rows() {
        let csv = "tick,service_ticks\n2,0\n2,4\n";
        assert!(load_arrivals_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn rejects_tick_zero() {
        let csv = "tick,service_ticks\n0,1\n";
        let err = load_arrivals_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::TickZero));
    }

    #[test]
    fn rejects_service_ending_past_last_tick() {
        let csv = "tick,service_ticks\n2,18446744073709551615\n";
        let err = load_arrivals_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::EndsPastLastTick { tick: Tick(2), .. }));
    }

    #[test]
    fn rejects_negative_duration() {
        let csv = "tick,service_ticks\n1,-3\n";
        let err = load_arrivals_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ScheduleError::Parse(_)));
    }

    #[test]
    fn rejects_non_integer() {
        let csv = "tick,service_ticks\n1,abc\n";
        assert!(matches!(
            load_arrivals_reader(Cursor::new(csv)),
            Err(ScheduleError::Parse(_))
        ));
    }
}
