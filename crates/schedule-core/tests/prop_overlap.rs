//! Property-based tests for interval overlap, parsing, and lane packing.
//!
//! These verify invariants that should hold for *any* valid input, not just
//! the examples in the other test files.

use proptest::prelude::*;
use schedule_core::{
    detect_conflicts, layout, MeetingInterval, ScheduleSlot, TimeAxis, TimeOfDay, WeekDay,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_weekday() -> impl Strategy<Value = WeekDay> {
    prop_oneof![
        Just(WeekDay::Monday),
        Just(WeekDay::Tuesday),
        Just(WeekDay::Wednesday),
        Just(WeekDay::Thursday),
        Just(WeekDay::Friday),
    ]
}

/// Generate a valid meeting: start anywhere in the day, nonzero duration that
/// still ends within the day.
fn arb_meeting() -> impl Strategy<Value = MeetingInterval> {
    (arb_weekday(), 0u16..1439).prop_flat_map(|(day, start)| {
        (Just(day), Just(start), 1u16..=(1439 - start))
    })
    .prop_map(|(day, start, dur)| {
        MeetingInterval::new(
            day,
            TimeOfDay::from_minutes(start).unwrap(),
            TimeOfDay::from_minutes(start + dur).unwrap(),
        )
        .unwrap()
    })
}

fn arb_slot() -> impl Strategy<Value = ScheduleSlot> {
    arb_meeting().prop_map(|m| ScheduleSlot::enrolled(1, "C-101", "Course", "Teacher", "Room", m))
}

// ---------------------------------------------------------------------------
// Overlap properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn overlap_is_symmetric(a in arb_meeting(), b in arb_meeting()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn meeting_overlaps_itself(a in arb_meeting()) {
        prop_assert!(a.overlaps(&a));
    }

    #[test]
    fn different_days_never_overlap(a in arb_meeting(), b in arb_meeting()) {
        prop_assume!(a.day != b.day);
        prop_assert!(!a.overlaps(&b));
    }

    #[test]
    fn touching_meetings_never_overlap(day in arb_weekday(), s in 1u16..1438, d1 in 1u16..100, d2 in 1u16..100) {
        prop_assume!(s >= d1 && s + d2 < 1440);
        // a ends exactly where b starts.
        let a = MeetingInterval::new(
            day,
            TimeOfDay::from_minutes(s - d1).unwrap(),
            TimeOfDay::from_minutes(s).unwrap(),
        ).unwrap();
        let b = MeetingInterval::new(
            day,
            TimeOfDay::from_minutes(s).unwrap(),
            TimeOfDay::from_minutes(s + d2).unwrap(),
        ).unwrap();
        prop_assert!(!a.overlaps(&b));
        prop_assert!(!b.overlaps(&a));
    }
}

// ---------------------------------------------------------------------------
// Detector completeness
// ---------------------------------------------------------------------------

proptest! {
    /// The descriptor count equals the number of overlapping (candidate,
    /// enrolled) pairs: nothing deduplicated, nothing dropped.
    #[test]
    fn detector_reports_exactly_the_overlapping_pairs(
        candidate in prop::collection::vec(arb_meeting(), 0..6),
        enrolled in prop::collection::vec(arb_slot(), 0..6),
    ) {
        let expected = candidate
            .iter()
            .flat_map(|c| enrolled.iter().filter(move |e| c.overlaps(&e.interval)))
            .count();

        prop_assert_eq!(detect_conflicts(&candidate, &enrolled).len(), expected);
    }
}

// ---------------------------------------------------------------------------
// Time parsing round-trip
// ---------------------------------------------------------------------------

proptest! {
    /// parse(format(t)) == t for every minute of the day.
    #[test]
    fn format_parse_round_trip(minutes in 0u16..1440) {
        let t = TimeOfDay::from_minutes(minutes).unwrap();
        let parsed = TimeOfDay::parse(&t.to_string()).unwrap();
        prop_assert_eq!(parsed, t);
    }
}

// ---------------------------------------------------------------------------
// Lane packing
// ---------------------------------------------------------------------------

proptest! {
    /// Within every (day, anchor) cell: N blocks get lanes 0..N-1 and all
    /// carry lane_count == N, so the N equal-width lanes tile the column.
    #[test]
    fn lanes_tile_each_start_cell(slots in prop::collection::vec(arb_slot(), 0..12)) {
        let axis = TimeAxis::school_day();
        let blocks = layout(&slots, &WeekDay::ALL, &axis);

        use std::collections::BTreeMap;
        let mut cells: BTreeMap<(usize, u32), Vec<usize>> = BTreeMap::new();
        for b in &blocks {
            cells.entry((b.day_column, b.row.floor() as u32)).or_default().push(b.lane);
        }

        for ((day, anchor), lanes) in cells {
            let n = lanes.len();
            let blocks_in_cell: Vec<_> = blocks
                .iter()
                .filter(|b| b.day_column == day && b.row.floor() as u32 == anchor)
                .collect();
            for b in &blocks_in_cell {
                prop_assert_eq!(b.lane_count, n);
            }
            let mut sorted = lanes.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>(), "lanes must be 0..N-1");
        }
    }
}
