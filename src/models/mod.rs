//! Timetabling domain models.
//!
//! Core data types for representing a weekly university timetable:
//! passive entity records, the hour-grid time vocabulary, and the central
//! timetable store.
//!
//! # Entities
//!
//! | Type | Role |
//! |------|------|
//! | `Course` | recurring weekly sessions to place |
//! | `Instructor` | availability and preference constraints |
//! | `Classroom` | capacity and room-type constraints |
//! | `Timetable` | the shared (day × hour × room) grid |

mod classroom;
mod course;
mod instructor;
mod time;
mod timetable;

pub use classroom::Classroom;
pub use course::Course;
pub use instructor::Instructor;
pub use time::{
    Day, TimeSlot, DEFAULT_SESSION_HOURS, GRID_END_HOUR, GRID_START_HOUR, MAX_CONSECUTIVE_HOURS,
    SEARCH_END_HOUR, WORKDAY_END_HOUR, WORKDAY_START_HOUR,
};
pub use timetable::{Occupant, ScheduleEntry, Timetable};
