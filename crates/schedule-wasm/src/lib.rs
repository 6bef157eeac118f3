//! WASM bindings for schedule-core.
//!
//! Exposes conflict detection, overlay previews, and weekly grid layout to
//! the planner UI via `wasm-bindgen`. All complex values cross the boundary
//! as JSON strings whose field names match the backend API payloads
//! (`dayOfWeek` as `"MONDAY"` or 1-5, `startTime` as `"HH:MM:SS"` or a full
//! ISO timestamp).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p schedule-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir frontend/src/wasm/ \
//!   target/wasm32-unknown-unknown/release/schedule_wasm.wasm
//! ```

use schedule_core::{
    attach_overlay, detect_conflicts, layout, MeetingInterval, OverlayInfo, ScheduleSlot,
    TimeAxis, TimeOfDay, WeekDay,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// A course-section meeting as the backend serves it.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MeetingInput {
    day_of_week: WeekDay,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
}

impl MeetingInput {
    fn into_interval(self) -> Result<MeetingInterval, JsValue> {
        MeetingInterval::new(self.day_of_week, self.start_time, self.end_time)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

/// A schedule slot in the shape the grid component consumes.
///
/// On input, `dayOfWeek` and the time fields accept every backend variant;
/// on output, days are 1-5 integers and times are `"HH:MM"` labels.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlotDto {
    #[serde(default)]
    enrollment_id: Option<u64>,
    course_code: String,
    course_name: String,
    teacher_name: String,
    classroom: String,
    day_of_week: WeekDay,
    start_time: TimeOfDay,
    end_time: TimeOfDay,
    #[serde(default)]
    is_overlay: bool,
    #[serde(default)]
    has_conflict: bool,
}

impl SlotDto {
    fn into_slot(self) -> Result<ScheduleSlot, JsValue> {
        let interval = MeetingInterval::new(self.day_of_week, self.start_time, self.end_time)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(ScheduleSlot {
            enrollment_id: self.enrollment_id,
            course_code: self.course_code,
            course_name: self.course_name,
            teacher_name: self.teacher_name,
            classroom: self.classroom,
            interval,
            is_overlay: self.is_overlay,
            has_conflict: self.has_conflict,
        })
    }
}

impl From<&ScheduleSlot> for SlotDto {
    fn from(s: &ScheduleSlot) -> Self {
        Self {
            enrollment_id: s.enrollment_id,
            course_code: s.course_code.clone(),
            course_name: s.course_name.clone(),
            teacher_name: s.teacher_name.clone(),
            classroom: s.classroom.clone(),
            day_of_week: s.interval.day,
            start_time: s.interval.start,
            end_time: s.interval.end,
            is_overlay: s.is_overlay,
            has_conflict: s.has_conflict,
        }
    }
}

/// One conflict row for the "Schedule Conflicts" panel.
#[derive(Serialize)]
struct ConflictDto {
    course: String,
    teacher: String,
    day: String,
    time: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OverlayInfoInput {
    course_code: String,
    course_name: String,
    teacher_name: String,
    classroom: String,
}

// ---------------------------------------------------------------------------
// JSON parsing helpers
// ---------------------------------------------------------------------------

fn parse_meetings_json(json: &str) -> Result<Vec<MeetingInterval>, JsValue> {
    let inputs: Vec<MeetingInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid meetings JSON: {}", e)))?;
    inputs.into_iter().map(MeetingInput::into_interval).collect()
}

fn parse_slots_json(json: &str) -> Result<Vec<ScheduleSlot>, JsValue> {
    let inputs: Vec<SlotDto> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid slots JSON: {}", e)))?;
    inputs.into_iter().map(SlotDto::into_slot).collect()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Find every conflict between a candidate section's meetings and the
/// student's enrolled slots.
///
/// `candidate_json` is a JSON array of `{dayOfWeek, startTime, endTime}`
/// meeting objects; `enrolled_json` is a JSON array of slot objects. Returns
/// a JSON array of `{course, teacher, day, time}` rows, where `day` is a
/// display name like `"Monday"` and `time` is `"HH:MM-HH:MM"`.
#[wasm_bindgen(js_name = "detectConflicts")]
pub fn detect_conflicts_json(
    candidate_json: &str,
    enrolled_json: &str,
) -> Result<String, JsValue> {
    let candidate = parse_meetings_json(candidate_json)?;
    let enrolled = parse_slots_json(enrolled_json)?;

    let dtos: Vec<ConflictDto> = detect_conflicts(&candidate, &enrolled)
        .into_iter()
        .map(|c| ConflictDto {
            course: c.course_name,
            teacher: c.teacher_name,
            day: c.day.name().to_string(),
            time: c.time_range,
        })
        .collect();

    to_json(&dtos)
}

/// Combine the enrolled snapshot with a candidate section's meetings.
///
/// Returns the enrolled slots plus one overlay slot per candidate meeting,
/// with `hasConflict` computed on both sides of every overlap. `info_json`
/// carries the candidate's display metadata:
/// `{courseCode, courseName, teacherName, classroom}`.
#[wasm_bindgen(js_name = "previewSchedule")]
pub fn preview_schedule_json(
    enrolled_json: &str,
    candidate_json: &str,
    info_json: &str,
) -> Result<String, JsValue> {
    let enrolled = parse_slots_json(enrolled_json)?;
    let candidate = parse_meetings_json(candidate_json)?;
    let info: OverlayInfoInput = serde_json::from_str(info_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid overlay info JSON: {}", e)))?;

    let combined = attach_overlay(
        &enrolled,
        &candidate,
        &OverlayInfo {
            course_code: info.course_code,
            course_name: info.course_name,
            teacher_name: info.teacher_name,
            classroom: info.classroom,
        },
    );

    let dtos: Vec<SlotDto> = combined.iter().map(SlotDto::from).collect();
    to_json(&dtos)
}

/// Lay out slots on the weekly grid.
///
/// `slots_json` is a JSON array of slot objects. The axis defaults to the
/// standard school day (08:00-17:00 in 30-minute rows) when the optional
/// arguments are omitted. Returns a JSON array of positioned blocks:
/// `{slotIndex, dayColumn, row, rowSpan, lane, laneCount, zIndex}`.
#[wasm_bindgen(js_name = "layoutWeek")]
pub fn layout_week_json(
    slots_json: &str,
    axis_start: Option<String>,
    axis_end: Option<String>,
    row_unit_minutes: Option<u16>,
) -> Result<String, JsValue> {
    let slots = parse_slots_json(slots_json)?;

    let default_axis = TimeAxis::school_day();
    let start = match axis_start {
        Some(raw) => TimeOfDay::parse(&raw).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => default_axis.start(),
    };
    let end = match axis_end {
        Some(raw) => TimeOfDay::parse(&raw).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => default_axis.end(),
    };
    let unit = row_unit_minutes.unwrap_or(default_axis.row_unit_minutes());
    let axis = TimeAxis::new(start, end, unit).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let blocks = layout(&slots, &WeekDay::ALL, &axis);
    to_json(&blocks)
}
