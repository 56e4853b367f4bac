//! Course model.
//!
//! A course is the unit of scheduling: a recurring set of weekly sessions
//! taught by one instructor in one classroom.

use serde::{Deserialize, Serialize};

use super::{Day, TimeSlot};

/// A course to be placed on the weekly timetable.
///
/// `instructor_id` and `classroom_id` are back-references resolved by the
/// allocator at the start of a run; a course never owns its instructor or
/// room. `scheduled_slots` is appended only by the allocator and must never
/// sum past `hours_per_week`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Section label.
    pub section: String,
    /// Owning department.
    pub department: String,
    /// Assigned instructor (by ID).
    pub instructor_id: String,
    /// Assigned classroom (by ID).
    pub classroom_id: String,
    /// Required teaching hours per week.
    pub hours_per_week: u8,
    /// Enrolled student count.
    pub student_count: u32,
    /// Whether sessions are delivered remotely.
    pub is_online: bool,
    /// Committed session intervals, in commit order.
    #[serde(default)]
    pub scheduled_slots: Vec<TimeSlot>,
}

impl Course {
    /// Creates a new course with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            section: String::new(),
            department: String::new(),
            instructor_id: String::new(),
            classroom_id: String::new(),
            hours_per_week: 0,
            student_count: 0,
            is_online: false,
            scheduled_slots: Vec::new(),
        }
    }

    /// Sets the course name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the section label.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    /// Sets the owning department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the instructor reference.
    pub fn with_instructor(mut self, instructor_id: impl Into<String>) -> Self {
        self.instructor_id = instructor_id.into();
        self
    }

    /// Sets the classroom reference.
    pub fn with_classroom(mut self, classroom_id: impl Into<String>) -> Self {
        self.classroom_id = classroom_id.into();
        self
    }

    /// Sets the required weekly hours.
    pub fn with_hours_per_week(mut self, hours: u8) -> Self {
        self.hours_per_week = hours;
        self
    }

    /// Sets the enrolled student count.
    pub fn with_student_count(mut self, count: u32) -> Self {
        self.student_count = count;
        self
    }

    /// Sets the delivery mode.
    pub fn with_online(mut self, is_online: bool) -> Self {
        self.is_online = is_online;
        self
    }

    /// Hours committed so far across the whole week.
    pub fn committed_hours(&self) -> u8 {
        self.scheduled_slots.iter().map(|s| s.duration()).sum()
    }

    /// Hours committed so far on one day.
    pub fn hours_on_day(&self, day: Day) -> u8 {
        self.scheduled_slots
            .iter()
            .filter(|s| s.day == day)
            .map(|s| s.duration())
            .sum()
    }

    /// Whether the course name marks it as computer-based (lab required).
    pub fn is_computer_course(&self) -> bool {
        self.name.to_lowercase().contains("computer")
    }
}
