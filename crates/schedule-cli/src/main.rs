//! `mwsched` CLI — inspect schedule conflicts and render the weekly grid
//! from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Check a candidate section against an enrolled snapshot
//! mwsched conflicts --candidate section.json --enrolled schedule.json
//!
//! # Render a schedule as an ASCII weekly grid (stdin → stdout)
//! cat schedule.json | mwsched grid
//!
//! # Render with a custom axis
//! mwsched grid -i schedule.json --start 07:00 --end 18:00 --unit 60
//! ```
//!
//! Meeting files are JSON arrays of `{dayOfWeek, startTime, endTime}`
//! objects; schedule files are JSON arrays of slot objects, both in the
//! shapes the backend API serves.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use schedule_core::{
    detect_conflicts, layout, MeetingInterval, PositionedBlock, ScheduleSlot, TimeAxis,
    TimeOfDay, WeekDay,
};
use serde_json::Value;
use std::io::{self, Read};

#[derive(Parser)]
#[command(
    name = "mwsched",
    version,
    about = "Maplewood schedule inspector (conflict detection, weekly grid)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a candidate section's meetings against an enrolled schedule
    Conflicts {
        /// JSON file with the candidate section's meetings
        #[arg(long)]
        candidate: String,
        /// JSON file with the enrolled schedule slots (reads stdin if omitted)
        #[arg(long)]
        enrolled: Option<String>,
    },
    /// Render schedule slots as an ASCII weekly grid
    Grid {
        /// Input slots file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// First axis tick, e.g. "08:00"
        #[arg(long)]
        start: Option<String>,
        /// Last axis tick, e.g. "17:00"
        #[arg(long)]
        end: Option<String>,
        /// Minutes per grid row
        #[arg(long, default_value_t = 30)]
        unit: u16,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Conflicts {
            candidate,
            enrolled,
        } => {
            let candidate = read_meetings(Some(candidate.as_str()))?;
            let enrolled = read_slots(enrolled.as_deref())?;

            let conflicts = detect_conflicts(&candidate, &enrolled);
            if conflicts.is_empty() {
                println!("No schedule conflicts");
            } else {
                for c in &conflicts {
                    println!("{}  {} {}  with {}", c.course_name, c.day, c.time_range, c.teacher_name);
                }
                println!("{} conflict(s)", conflicts.len());
            }
        }
        Commands::Grid {
            input,
            start,
            end,
            unit,
        } => {
            let slots = read_slots(input.as_deref())?;
            let axis = build_axis(start.as_deref(), end.as_deref(), unit)?;
            print!("{}", render_grid(&slots, &axis));
        }
    }

    Ok(())
}

fn build_axis(start: Option<&str>, end: Option<&str>, unit: u16) -> Result<TimeAxis> {
    let default = TimeAxis::school_day();
    let start = match start {
        Some(raw) => TimeOfDay::parse(raw).with_context(|| format!("Invalid --start: {}", raw))?,
        None => default.start(),
    };
    let end = match end {
        Some(raw) => TimeOfDay::parse(raw).with_context(|| format!("Invalid --end: {}", raw))?,
        None => default.end(),
    };
    TimeAxis::new(start, end, unit).context("Invalid grid axis")
}

/// Render the laid-out blocks as a plain-text day × time table.
///
/// Each block is printed once in its anchor row; conflicts are marked with
/// `!` and overlay previews with `~`. Lanes within a cell are joined with
/// `/`, mirroring the equal-width sub-columns of the real grid.
fn render_grid(slots: &[ScheduleSlot], axis: &TimeAxis) -> String {
    const COL: usize = 15;
    let days = WeekDay::ALL;
    let blocks = layout(slots, &days, axis);

    let mut out = String::new();
    out.push_str(&format!("{:<7}", "Time"));
    for day in days {
        out.push_str(&format!("{:<width$}", day.name(), width = COL));
    }
    out.push('\n');

    for (row, tick) in axis.ticks().enumerate() {
        out.push_str(&format!("{:<7}", tick.to_string()));
        for col in 0..days.len() {
            let cell = cell_label(&blocks, slots, col, row);
            out.push_str(&format!("{:<width$}", cell, width = COL));
        }
        out.push('\n');
    }
    out
}

fn cell_label(
    blocks: &[PositionedBlock],
    slots: &[ScheduleSlot],
    day_column: usize,
    row: usize,
) -> String {
    let labels: Vec<String> = blocks
        .iter()
        .filter(|b| b.day_column == day_column && b.row.floor() as usize == row)
        .map(|b| {
            let slot = &slots[b.slot_index];
            let mark = if slot.has_conflict {
                "!"
            } else if slot.is_overlay {
                "~"
            } else {
                ""
            };
            format!("{}{}", mark, slot.course_code)
        })
        .collect();
    labels.join("/")
}

fn read_meetings(path: Option<&str>) -> Result<Vec<MeetingInterval>> {
    let raw = read_input(path)?;
    let values: Vec<Value> =
        serde_json::from_str(&raw).context("Meetings input is not a JSON array")?;
    values.into_iter().map(meeting_from_value).collect()
}

fn read_slots(path: Option<&str>) -> Result<Vec<ScheduleSlot>> {
    let raw = read_input(path)?;
    let values: Vec<Value> =
        serde_json::from_str(&raw).context("Slots input is not a JSON array")?;
    values.into_iter().map(slot_from_value).collect()
}

/// Build a meeting from a backend-shaped JSON object
/// (`{dayOfWeek, startTime, endTime}`).
fn meeting_from_value(value: Value) -> Result<MeetingInterval> {
    let day: WeekDay = serde_json::from_value(
        value
            .get("dayOfWeek")
            .cloned()
            .context("Meeting is missing dayOfWeek")?,
    )
    .context("Invalid dayOfWeek")?;
    let start = time_field(&value, "startTime")?;
    let end = time_field(&value, "endTime")?;
    MeetingInterval::new(day, start, end).map_err(Into::into)
}

fn slot_from_value(value: Value) -> Result<ScheduleSlot> {
    let interval = meeting_from_value(value.clone())?;
    let text = |key: &str| -> String {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    Ok(ScheduleSlot {
        enrollment_id: value.get("enrollmentId").and_then(Value::as_u64),
        course_code: text("courseCode"),
        course_name: text("courseName"),
        teacher_name: text("teacherName"),
        classroom: text("classroom"),
        interval,
        is_overlay: value
            .get("isOverlay")
            .and_then(Value::as_bool)
            .unwrap_or(false),
        has_conflict: value
            .get("hasConflict")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

fn time_field(value: &Value, key: &str) -> Result<TimeOfDay> {
    let raw = value
        .get(key)
        .and_then(Value::as_str)
        .with_context(|| format!("Meeting is missing {}", key))?;
    TimeOfDay::parse(raw).map_err(Into::into)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
