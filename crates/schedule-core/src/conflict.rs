//! Schedule conflict detection.
//!
//! Performs pairwise comparison between a candidate section's meetings and a
//! student's enrolled slots. Back-to-back meetings (where one ends exactly
//! when another starts) are NOT conflicts.

use serde::{Deserialize, Serialize};

use crate::meeting::MeetingInterval;
use crate::slot::ScheduleSlot;
use crate::time::WeekDay;

/// A detected conflict, carrying the *enrolled* side's display data.
///
/// This is a read-only projection for the UI ("Biology, Monday 09:00-10:00,
/// with J. Rivera"); it is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictDescriptor {
    pub course_name: String,
    pub teacher_name: String,
    pub day: WeekDay,
    /// Time range of the enrolled meeting, e.g. `"09:00-10:00"`.
    pub time_range: String,
}

/// Find every conflict between a candidate section's meetings and the
/// student's currently enrolled slots.
///
/// One descriptor is emitted per overlapping (candidate, enrolled) pair, with
/// no deduplication across multiple overlapping enrolled slots. Descriptors come
/// out in iteration order (candidate outer, enrolled inner); callers needing
/// a stable display order must sort explicitly.
///
/// Callers must not invoke this for a section the student is already
/// enrolled in: such a section trivially "conflicts with itself", which is
/// not useful signal. Empty inputs produce an empty result; a section with
/// no scheduled meetings yet is not an error.
pub fn detect_conflicts(
    candidate: &[MeetingInterval],
    enrolled: &[ScheduleSlot],
) -> Vec<ConflictDescriptor> {
    let mut conflicts = Vec::new();

    for meeting in candidate {
        for slot in enrolled {
            if meeting.overlaps(&slot.interval) {
                conflicts.push(ConflictDescriptor {
                    course_name: slot.course_name.clone(),
                    teacher_name: slot.teacher_name.clone(),
                    day: slot.interval.day,
                    time_range: slot.interval.time_range_label(),
                });
            }
        }
    }

    conflicts
}
