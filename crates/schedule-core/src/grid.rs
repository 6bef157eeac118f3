//! Weekly grid layout.
//!
//! Maps schedule slots onto a day × time grid: which day column, which row
//! offset, how many rows tall, and a horizontal lane assignment when several
//! slots start in the same cell. A pure, stateless transform invoked fresh on
//! every render; no layout state survives between calls.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::slot::ScheduleSlot;
use crate::time::{TimeOfDay, WeekDay};

/// Stacking order so a conflicting preview is never hidden behind a
/// legitimately enrolled block: conflict above overlay above enrolled.
pub const Z_CONFLICT: u8 = 15;
pub const Z_OVERLAY: u8 = 10;
pub const Z_ENROLLED: u8 = 5;

/// The vertical time axis of the grid: first tick, last tick, and the number
/// of minutes each row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    start: TimeOfDay,
    end: TimeOfDay,
    row_unit_minutes: u16,
}

impl TimeAxis {
    /// Build an axis. Rejects `start >= end` and a zero row unit, both of
    /// which would make the grid degenerate.
    pub fn new(start: TimeOfDay, end: TimeOfDay, row_unit_minutes: u16) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::InvalidAxis(format!(
                "axis start {} is not before end {}",
                start, end
            )));
        }
        if row_unit_minutes == 0 {
            return Err(ScheduleError::InvalidAxis(
                "row unit must be at least one minute".to_string(),
            ));
        }
        Ok(Self {
            start,
            end,
            row_unit_minutes,
        })
    }

    /// The standard school-day axis: 08:00 to 17:00 in 30-minute rows.
    pub fn school_day() -> Self {
        Self {
            start: TimeOfDay::from_minutes_unchecked(8 * 60),
            end: TimeOfDay::from_minutes_unchecked(17 * 60),
            row_unit_minutes: 30,
        }
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    pub fn row_unit_minutes(&self) -> u16 {
        self.row_unit_minutes
    }

    /// Number of tick labels on the axis, both boundaries included.
    pub fn tick_count(&self) -> usize {
        let span = self.end.minutes_since(self.start);
        (span / self.row_unit_minutes) as usize + 1
    }

    /// Tick labels from first to last, one per row unit.
    pub fn ticks(&self) -> impl Iterator<Item = TimeOfDay> + '_ {
        (0..self.tick_count()).map(move |i| {
            TimeOfDay::from_minutes_unchecked(
                self.start.minutes() + i as u16 * self.row_unit_minutes,
            )
        })
    }

    /// Fractional row offset of a time from the axis start, or `None` when
    /// the time falls outside `[start, end)`.
    fn row_of(&self, time: TimeOfDay) -> Option<f64> {
        if time < self.start || time >= self.end {
            return None;
        }
        let offset = time.minutes_since(self.start);
        Some(f64::from(offset) / f64::from(self.row_unit_minutes))
    }
}

/// A rendering rectangle for one slot.
///
/// `row` is fractional so meetings that start between axis ticks sit at the
/// right sub-tick offset. `lane`/`lane_count` divide the day column into
/// equal-width sub-columns for slots that start in the same cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedBlock {
    /// Index into the slot list passed to [`layout`].
    pub slot_index: usize,
    /// Index into the day list passed to [`layout`].
    pub day_column: usize,
    /// Fractional rows below the first axis tick.
    pub row: f64,
    /// Rows tall, from [`MeetingInterval::duration_slots`].
    ///
    /// [`MeetingInterval::duration_slots`]: crate::meeting::MeetingInterval::duration_slots
    pub row_span: u32,
    /// Sub-column within the day column, 0-based, in input order.
    pub lane: usize,
    /// Total sub-columns in this slot's start cell; each lane is
    /// `1 / lane_count` of the column width.
    pub lane_count: usize,
    /// Stacking order: [`Z_CONFLICT`] > [`Z_OVERLAY`] > [`Z_ENROLLED`].
    pub z_index: u8,
}

/// Lay out slots on a weekly grid.
///
/// Each slot is anchored once, at its start row; its `row_span` carries it
/// visually through the rows it passes through (a slot is never re-emitted at
/// intermediate rows). Slots whose day is not in `days` or whose start time
/// falls outside the axis are skipped, never clamped.
///
/// Lane packing is a per-cell heuristic: only slots anchored at the same
/// (day, tick) cell share out the column width, in stable input order. It is
/// not an interval-graph coloring and does not minimize lanes across a whole
/// day. Fractional row heights (when the row unit does not divide a meeting's
/// duration) degrade gracefully; they are not an error.
pub fn layout(slots: &[ScheduleSlot], days: &[WeekDay], axis: &TimeAxis) -> Vec<PositionedBlock> {
    let mut blocks = Vec::new();
    // (day column, anchor tick) -> indices into `blocks`, in input order.
    let mut cells: BTreeMap<(usize, u32), Vec<usize>> = BTreeMap::new();

    for (slot_index, slot) in slots.iter().enumerate() {
        let Some(day_column) = days.iter().position(|d| *d == slot.interval.day) else {
            continue;
        };
        let Some(row) = axis.row_of(slot.interval.start) else {
            continue;
        };

        let z_index = if slot.has_conflict {
            Z_CONFLICT
        } else if slot.is_overlay {
            Z_OVERLAY
        } else {
            Z_ENROLLED
        };

        let anchor = row.floor() as u32;
        let block_index = blocks.len();
        blocks.push(PositionedBlock {
            slot_index,
            day_column,
            row,
            row_span: slot.interval.duration_slots(axis.row_unit_minutes),
            lane: 0,
            lane_count: 1,
            z_index,
        });
        cells.entry((day_column, anchor)).or_default().push(block_index);
    }

    // Share each start cell out among its co-starting slots.
    for group in cells.values() {
        let lane_count = group.len();
        for (lane, &block_index) in group.iter().enumerate() {
            blocks[block_index].lane = lane;
            blocks[block_index].lane_count = lane_count;
        }
    }

    blocks
}
