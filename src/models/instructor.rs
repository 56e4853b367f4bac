//! Instructor model.
//!
//! Availability semantics:
//! - `unavailable_slots` are hard exclusions, regardless of employment.
//! - `preferred_slots` are meaningful only for part-time instructors and
//!   relax the default weekday 08:00–17:00 restriction when one fully
//!   covers a requested span.

use serde::{Deserialize, Serialize};

use super::{Day, TimeSlot};

/// An instructor who can be assigned course sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    /// Unique instructor identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Whether employed part-time.
    pub is_part_time: bool,
    /// Hard exclusion intervals.
    pub unavailable_slots: Vec<TimeSlot>,
    /// Self-declared availability windows (part-time only).
    pub preferred_slots: Vec<TimeSlot>,
    /// Courses currently assigned. Bookkeeping only; conflict detection
    /// derives from the timetable, never from this list.
    #[serde(default)]
    pub assigned_courses: Vec<String>,
}

impl Instructor {
    /// Creates a new full-time instructor with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            is_part_time: false,
            unavailable_slots: Vec::new(),
            preferred_slots: Vec::new(),
            assigned_courses: Vec::new(),
        }
    }

    /// Sets the instructor name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the part-time flag.
    pub fn with_part_time(mut self, is_part_time: bool) -> Self {
        self.is_part_time = is_part_time;
        self
    }

    /// Adds a hard exclusion interval.
    pub fn with_unavailable(mut self, day: Day, start_hour: u8, end_hour: u8) -> Self {
        self.unavailable_slots
            .push(TimeSlot::new(day, start_hour, end_hour));
        self
    }

    /// Adds a preferred interval.
    pub fn with_preferred(mut self, day: Day, start_hour: u8, end_hour: u8) -> Self {
        self.preferred_slots
            .push(TimeSlot::new(day, start_hour, end_hour));
        self
    }

    /// Whether `[start_hour, end_hour)` on `day` falls inside a declared
    /// preferred interval.
    ///
    /// Always false for full-time instructors: their preferences carry no
    /// scheduling meaning.
    pub fn prefers(&self, day: Day, start_hour: u8, end_hour: u8) -> bool {
        self.is_part_time
            && self
                .preferred_slots
                .iter()
                .any(|s| s.contains_span(day, start_hour, end_hour))
    }

    /// Whether the span overlaps any declared unavailable interval.
    pub fn is_blocked(&self, day: Day, start_hour: u8, end_hour: u8) -> bool {
        let span = TimeSlot::new(day, start_hour, end_hour);
        self.unavailable_slots.iter().any(|s| s.overlaps(&span))
    }
}
