//! Error types for schedule-core operations.

use thiserror::Error;

/// Errors that can occur while building schedule data from backend records.
///
/// These are data-integrity problems originating upstream. The core fails
/// loudly on the single offending record instead of coercing to a default,
/// since a silently-wrong time could hide a real scheduling conflict.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A meeting time string could not be parsed into a valid time of day.
    #[error("Invalid time format: {0:?}")]
    InvalidTimeFormat(String),

    /// A meeting's start is not strictly before its end.
    #[error("Invalid meeting interval: start {start} is not before end {end}")]
    InvalidInterval { start: String, end: String },

    /// A day-of-week value outside Monday-Friday (name or 1-5 integer).
    #[error("Invalid day of week: {0:?}")]
    InvalidDay(String),

    /// A grid time axis that cannot produce any rows.
    #[error("Invalid time axis: {0}")]
    InvalidAxis(String),
}

/// Convenience alias used throughout schedule-core.
pub type Result<T> = std::result::Result<T, ScheduleError>;
