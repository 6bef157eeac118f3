//! Renderable schedule slots.

use serde::{Deserialize, Serialize};

use crate::meeting::MeetingInterval;

/// A renderable unit in the weekly grid: one meeting plus display metadata.
///
/// `enrollment_id` is `None` for preview/overlay slots that the student is
/// only considering; there is no owning enrollment yet. `has_conflict` is a
/// computed flag (set by [`crate::preview::attach_overlay`]), never an input
/// from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    /// Owning enrollment, or `None` for a preview-only slot.
    #[serde(default)]
    pub enrollment_id: Option<u64>,
    pub course_code: String,
    pub course_name: String,
    pub teacher_name: String,
    pub classroom: String,
    #[serde(flatten)]
    pub interval: MeetingInterval,
    /// Candidate slot shown while the student considers enrolling.
    #[serde(default)]
    pub is_overlay: bool,
    /// Computed: this slot overlaps a slot on the other side of a preview.
    #[serde(default)]
    pub has_conflict: bool,
}

impl ScheduleSlot {
    /// A committed slot owned by an enrollment.
    pub fn enrolled(
        enrollment_id: u64,
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        teacher_name: impl Into<String>,
        classroom: impl Into<String>,
        interval: MeetingInterval,
    ) -> Self {
        Self {
            enrollment_id: Some(enrollment_id),
            course_code: course_code.into(),
            course_name: course_name.into(),
            teacher_name: teacher_name.into(),
            classroom: classroom.into(),
            interval,
            is_overlay: false,
            has_conflict: false,
        }
    }

    /// A preview-only slot for a section the student has not enrolled in.
    pub fn overlay(
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        teacher_name: impl Into<String>,
        classroom: impl Into<String>,
        interval: MeetingInterval,
    ) -> Self {
        Self {
            enrollment_id: None,
            course_code: course_code.into(),
            course_name: course_name.into(),
            teacher_name: teacher_name.into(),
            classroom: classroom.into(),
            interval,
            is_overlay: true,
            has_conflict: false,
        }
    }
}
