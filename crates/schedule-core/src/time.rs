//! Wall-clock times and school days.
//!
//! The backend is inconsistent about both shapes this module covers: meeting
//! times arrive as `"HH:MM:SS"` from most endpoints but as a full ISO-8601
//! timestamp from at least one, and the day of week arrives as an upper-case
//! name (`"MONDAY"`) in one payload and as a 1-5 integer in another. All of
//! that translation is centralized here; the rest of the crate only ever sees
//! [`TimeOfDay`] and [`WeekDay`] values.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ScheduleError};

/// A wall-clock time within a single day, precise to the minute.
///
/// Stored as minutes since midnight (0..=1439). Seconds in the input are
/// truncated, never rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from minutes since midnight. Values of 1440 or more are out of
    /// range for a single day.
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= 24 * 60 {
            return Err(ScheduleError::InvalidTimeFormat(format!(
                "{} minutes",
                minutes
            )));
        }
        Ok(Self(minutes))
    }

    /// In-range by construction; used for axis ticks derived from a
    /// validated [`crate::grid::TimeAxis`].
    pub(crate) const fn from_minutes_unchecked(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Parse a backend time string.
    ///
    /// Accepts `"HH:MM"`, `"HH:MM:SS"`, and an ISO-8601 timestamp containing
    /// a `'T'` separator (the date prefix is stripped, the time component is
    /// parsed; a trailing `Z` is tolerated). Anything else, including hours
    /// outside 0-23 or minutes outside 0-59, is a caller error reported as
    /// [`ScheduleError::InvalidTimeFormat`]. No recovery is attempted.
    pub fn parse(raw: &str) -> Result<Self> {
        // Some endpoints return "2024-01-01T09:00:00" instead of "09:00:00".
        let time_part = match raw.split_once('T') {
            Some((_, time)) => time,
            None => raw,
        };
        let time_part = time_part.trim().trim_end_matches('Z');

        let parsed = NaiveTime::parse_from_str(time_part, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(time_part, "%H:%M"))
            .map_err(|_| ScheduleError::InvalidTimeFormat(raw.to_string()))?;

        // Seconds are truncated; the grid works at minute precision.
        Ok(Self((parsed.hour() * 60 + parsed.minute()) as u16))
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component (0-23).
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }

    /// Whole minutes from `earlier` to `self`. Saturates at zero when
    /// `earlier` is actually later.
    pub fn minutes_since(&self, earlier: TimeOfDay) -> u16 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        TimeOfDay::parse(&raw).map_err(de::Error::custom)
    }
}

/// A school day, Monday through Friday.
///
/// Matches the backend convention where 1 = Monday and 5 = Friday; weekends
/// are not valid values anywhere in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum WeekDay {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
}

impl WeekDay {
    /// All five school days in order.
    pub const ALL: [WeekDay; 5] = [
        WeekDay::Monday,
        WeekDay::Tuesday,
        WeekDay::Wednesday,
        WeekDay::Thursday,
        WeekDay::Friday,
    ];

    /// Translate the backend's 1-5 integer form.
    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            1 => Ok(WeekDay::Monday),
            2 => Ok(WeekDay::Tuesday),
            3 => Ok(WeekDay::Wednesday),
            4 => Ok(WeekDay::Thursday),
            5 => Ok(WeekDay::Friday),
            other => Err(ScheduleError::InvalidDay(other.to_string())),
        }
    }

    /// Translate the backend's upper-case name form ("MONDAY"). Case is
    /// ignored so display-cased names round-trip too.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "MONDAY" => Ok(WeekDay::Monday),
            "TUESDAY" => Ok(WeekDay::Tuesday),
            "WEDNESDAY" => Ok(WeekDay::Wednesday),
            "THURSDAY" => Ok(WeekDay::Thursday),
            "FRIDAY" => Ok(WeekDay::Friday),
            _ => Err(ScheduleError::InvalidDay(name.to_string())),
        }
    }

    /// The 1-5 integer form.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Display name ("Monday").
    pub fn name(&self) -> &'static str {
        match self {
            WeekDay::Monday => "Monday",
            WeekDay::Tuesday => "Tuesday",
            WeekDay::Wednesday => "Wednesday",
            WeekDay::Thursday => "Thursday",
            WeekDay::Friday => "Friday",
        }
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for WeekDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.value())
    }
}

/// Accepts both backend shapes: an integer 1-5 or a day name string.
impl<'de> Deserialize<'de> for WeekDay {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        struct WeekDayVisitor;

        impl<'de> Visitor<'de> for WeekDayVisitor {
            type Value = WeekDay;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a day of week as an integer 1-5 or a name like \"MONDAY\"")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<WeekDay, E> {
                let value = u8::try_from(v)
                    .map_err(|_| de::Error::custom(ScheduleError::InvalidDay(v.to_string())))?;
                WeekDay::from_value(value).map_err(de::Error::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<WeekDay, E> {
                let value = u8::try_from(v)
                    .map_err(|_| de::Error::custom(ScheduleError::InvalidDay(v.to_string())))?;
                WeekDay::from_value(value).map_err(de::Error::custom)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<WeekDay, E> {
                WeekDay::from_name(v).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(WeekDayVisitor)
    }
}
