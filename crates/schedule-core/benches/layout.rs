//! Benchmarks for conflict detection and grid layout on a full student load.

use criterion::{criterion_group, criterion_main, Criterion};
use schedule_core::{
    detect_conflicts, layout, MeetingInterval, ScheduleSlot, TimeAxis, TimeOfDay, WeekDay,
};
use std::hint::black_box;

/// A realistic worst case: eight courses, two meetings each, spread over the
/// week with deliberate pile-ups on Monday and Wednesday mornings.
fn full_week() -> Vec<ScheduleSlot> {
    let mut slots = Vec::new();
    for course in 0..8u64 {
        for (day, start) in [
            (WeekDay::ALL[(course % 5) as usize], 8 * 60 + course as u16 * 30),
            (WeekDay::Wednesday, 9 * 60),
        ] {
            let interval = MeetingInterval::new(
                day,
                TimeOfDay::from_minutes(start).unwrap(),
                TimeOfDay::from_minutes(start + 60).unwrap(),
            )
            .unwrap();
            slots.push(ScheduleSlot::enrolled(
                course,
                format!("C-{:03}", course),
                format!("Course {}", course),
                "Teacher",
                "Room 1",
                interval,
            ));
        }
    }
    slots
}

fn bench_detect_conflicts(c: &mut Criterion) {
    let enrolled = full_week();
    let candidate: Vec<MeetingInterval> = (0..4)
        .map(|i| {
            MeetingInterval::new(
                WeekDay::ALL[i % 5],
                TimeOfDay::from_minutes(9 * 60).unwrap(),
                TimeOfDay::from_minutes(10 * 60).unwrap(),
            )
            .unwrap()
        })
        .collect();

    c.bench_function("detect_conflicts/8x2_vs_4", |b| {
        b.iter(|| detect_conflicts(black_box(&candidate), black_box(&enrolled)))
    });
}

fn bench_layout(c: &mut Criterion) {
    let slots = full_week();
    let axis = TimeAxis::school_day();

    c.bench_function("layout/full_week", |b| {
        b.iter(|| layout(black_box(&slots), &WeekDay::ALL, &axis))
    });
}

criterion_group!(benches, bench_detect_conflicts, bench_layout);
criterion_main!(benches);
