//! Overlay previews: the enrolled snapshot plus a candidate section.
//!
//! While a student considers enrolling, the grid shows their committed slots
//! with the candidate's meetings layered on top. This module builds that
//! combined slot list and computes the `has_conflict` flags; fetching the
//! snapshot (and re-fetching it after every enroll/drop) stays with the
//! presentation layer.

use crate::meeting::MeetingInterval;
use crate::slot::ScheduleSlot;

/// Display metadata for the section being previewed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayInfo {
    pub course_code: String,
    pub course_name: String,
    pub teacher_name: String,
    pub classroom: String,
}

/// Combine the enrolled snapshot with a candidate section's meetings.
///
/// Returns the enrolled slots followed by one overlay slot per candidate
/// meeting. `has_conflict` is set on both sides of every overlap, so the grid
/// can highlight the enrolled block as well as the preview block that clashes
/// with it. The inputs are not mutated; every call builds a fresh list.
pub fn attach_overlay(
    enrolled: &[ScheduleSlot],
    candidate: &[MeetingInterval],
    info: &OverlayInfo,
) -> Vec<ScheduleSlot> {
    let mut slots: Vec<ScheduleSlot> = enrolled.to_vec();

    for meeting in candidate {
        let mut overlay = ScheduleSlot::overlay(
            info.course_code.clone(),
            info.course_name.clone(),
            info.teacher_name.clone(),
            info.classroom.clone(),
            *meeting,
        );

        for slot in slots.iter_mut().take(enrolled.len()) {
            if meeting.overlaps(&slot.interval) {
                slot.has_conflict = true;
                overlay.has_conflict = true;
            }
        }

        slots.push(overlay);
    }

    slots
}
