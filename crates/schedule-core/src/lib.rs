//! # schedule-core
//!
//! Schedule conflict detection and weekly grid layout for the Maplewood
//! high-school course planner.
//!
//! The backend owns enrollment validation and all persistence; this crate is
//! the pure in-browser core the planner UI calls with already-fetched data:
//! does a candidate section clash with what the student is enrolled in, and
//! where does each meeting block sit on the Monday-Friday grid. Every
//! function is a total, synchronous transform over value data: no I/O, no
//! retained state, safe to call on every render.
//!
//! ## Quick start
//!
//! ```rust
//! use schedule_core::{detect_conflicts, MeetingInterval, ScheduleSlot, TimeOfDay, WeekDay};
//!
//! let enrolled = vec![ScheduleSlot::enrolled(
//!     41,
//!     "BIO-101",
//!     "Biology",
//!     "J. Rivera",
//!     "Lab 2",
//!     MeetingInterval::new(
//!         WeekDay::Monday,
//!         TimeOfDay::parse("09:00:00")?,
//!         TimeOfDay::parse("10:00:00")?,
//!     )?,
//! )];
//! let candidate = vec![MeetingInterval::new(
//!     WeekDay::Monday,
//!     TimeOfDay::parse("09:30")?,
//!     TimeOfDay::parse("10:30")?,
//! )?];
//!
//! let conflicts = detect_conflicts(&candidate, &enrolled);
//! assert_eq!(conflicts.len(), 1);
//! assert_eq!(conflicts[0].time_range, "09:00-10:00");
//! # Ok::<(), schedule_core::ScheduleError>(())
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `TimeOfDay` parsing (all backend time shapes) and `WeekDay`
//! - [`meeting`] — `MeetingInterval` and the half-open overlap test
//! - [`slot`] — renderable `ScheduleSlot` with overlay/conflict flags
//! - [`conflict`] — candidate-vs-enrolled conflict detection
//! - [`preview`] — enrolled snapshot + candidate overlay with computed flags
//! - [`grid`] — day × time grid layout with lane packing and z-order
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod grid;
pub mod meeting;
pub mod preview;
pub mod slot;
pub mod time;

pub use conflict::{detect_conflicts, ConflictDescriptor};
pub use error::ScheduleError;
pub use grid::{layout, PositionedBlock, TimeAxis, Z_CONFLICT, Z_ENROLLED, Z_OVERLAY};
pub use meeting::MeetingInterval;
pub use preview::{attach_overlay, OverlayInfo};
pub use slot::ScheduleSlot;
pub use time::{TimeOfDay, WeekDay};
