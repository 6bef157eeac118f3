//! Weekly meeting intervals and the overlap test.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::time::{TimeOfDay, WeekDay};

/// One recurring weekly time block at which a section convenes,
/// e.g. "Monday 09:00-10:00".
///
/// Invariant: `start < end`. Zero-length and reversed intervals are rejected
/// by [`MeetingInterval::new`]; intervals built by deserialization should be
/// checked with [`MeetingInterval::validate`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingInterval {
    pub day: WeekDay,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl MeetingInterval {
    /// Build an interval, rejecting `start >= end`.
    ///
    /// The start/end are reported back verbatim in the error; guessing intent
    /// by swapping or clamping could mask a data-entry error on the backend.
    pub fn new(day: WeekDay, start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        let interval = Self { day, start, end };
        interval.validate()?;
        Ok(interval)
    }

    /// Check the `start < end` invariant on an already-constructed interval.
    pub fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(ScheduleError::InvalidInterval {
                start: self.start.to_string(),
                end: self.end.to_string(),
            });
        }
        Ok(())
    }

    /// True iff the two intervals share a day and their time ranges overlap.
    ///
    /// Half-open interval test: `a.start < b.end && b.start < a.end`.
    /// Back-to-back meetings (one ending exactly when the other starts) are
    /// NOT a conflict; a class ending at 10:00 and another starting at 10:00
    /// is legal.
    pub fn overlaps(&self, other: &MeetingInterval) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }

    /// Length of the meeting in minutes.
    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes_since(self.start)
    }

    /// Number of display rows the interval spans on a grid with
    /// `row_unit_minutes` per row: `ceil(duration / unit) + 1`.
    ///
    /// The `+ 1` reserves one extra row of padding and exists purely to match
    /// the grid rendering convention; it is a display-layer convenience, not
    /// a scheduling invariant.
    pub fn duration_slots(&self, row_unit_minutes: u16) -> u32 {
        let dur = u32::from(self.duration_minutes());
        let unit = u32::from(row_unit_minutes);
        dur.div_ceil(unit) + 1
    }

    /// Display label for the time range, e.g. `"09:00-10:00"`.
    pub fn time_range_label(&self) -> String {
        format!("{}-{}", self.start, self.end)
    }
}
