//! Post-hoc verification of a committed timetable.
//!
//! Every check reads the timetable grid itself, never the per-course
//! bookkeeping, so any drift between the two surfaces here. Detects:
//! - Instructors booked in two rooms at the same hour
//! - Courses whose committed hours differ from their weekly requirement
//! - Same-day teaching runs longer than the consecutive-hour limit
//! - Sessions outside weekday working hours with no covering preference
//!
//! Adjacent online and in-person hours are reported as warnings; they do
//! not fail the report.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use itertools::Itertools;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::models::{
    Course, Day, Instructor, Timetable, GRID_END_HOUR, GRID_START_HOUR, MAX_CONSECUTIVE_HOURS,
    WORKDAY_END_HOUR, WORKDAY_START_HOUR,
};

/// Categories of timetable violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// An instructor occupies two rooms in the same hour.
    InstructorDoubleBooked,
    /// A course's committed hours differ from its weekly requirement.
    CourseHourMismatch,
    /// A course runs more consecutive same-day hours than allowed.
    ConsecutiveLimitExceeded,
    /// A session sits outside working hours without a preference covering it.
    OutsideAllowedHours,
}

/// A hard defect in a committed timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Defect category.
    pub kind: ViolationKind,
    /// Day of the offending cell, where the defect is cell-local.
    pub day: Option<Day>,
    /// Hour of the offending cell, where the defect is cell-local.
    pub hour: Option<u8>,
    /// The affected course, if one is identifiable.
    pub course_id: Option<String>,
    /// The affected instructor, if one is identifiable.
    pub instructor_id: Option<String>,
    /// Human-readable description.
    pub message: String,
}

impl Violation {
    /// Records an instructor present in more than one room at once.
    pub fn double_booked(
        instructor_id: impl Into<String>,
        day: Day,
        hour: u8,
        rooms: &[&str],
    ) -> Self {
        let instructor_id = instructor_id.into();
        Self {
            kind: ViolationKind::InstructorDoubleBooked,
            day: Some(day),
            hour: Some(hour),
            course_id: None,
            message: format!(
                "instructor '{}' is booked in rooms {} at {:?} {}:00",
                instructor_id,
                rooms.join(", "),
                day,
                hour
            ),
            instructor_id: Some(instructor_id),
        }
    }

    /// Records a course whose grid hours differ from its requirement.
    pub fn hour_mismatch(course_id: impl Into<String>, required: u8, committed: u8) -> Self {
        let course_id = course_id.into();
        Self {
            kind: ViolationKind::CourseHourMismatch,
            day: None,
            hour: None,
            message: format!(
                "course '{course_id}' has {committed} committed hours, requires {required}"
            ),
            course_id: Some(course_id),
            instructor_id: None,
        }
    }

    /// Records a same-day run longer than the consecutive-hour limit.
    pub fn consecutive_exceeded(
        course_id: impl Into<String>,
        day: Day,
        start_hour: u8,
        run: usize,
    ) -> Self {
        let course_id = course_id.into();
        Self {
            kind: ViolationKind::ConsecutiveLimitExceeded,
            day: Some(day),
            hour: Some(start_hour),
            message: format!(
                "course '{course_id}' runs {run} consecutive hours on {day:?} starting at {start_hour}:00"
            ),
            course_id: Some(course_id),
            instructor_id: None,
        }
    }

    /// Records a cell outside working hours with no covering preference.
    pub fn outside_hours(
        course_id: impl Into<String>,
        instructor_id: impl Into<String>,
        day: Day,
        hour: u8,
    ) -> Self {
        let course_id = course_id.into();
        let instructor_id = instructor_id.into();
        Self {
            kind: ViolationKind::OutsideAllowedHours,
            day: Some(day),
            hour: Some(hour),
            message: format!(
                "course '{course_id}' occupies {day:?} {hour}:00, outside working hours for instructor '{instructor_id}'"
            ),
            course_id: Some(course_id),
            instructor_id: Some(instructor_id),
        }
    }
}

/// A soft finding worth surfacing but not failing over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWarning {
    /// Day of the finding.
    pub day: Day,
    /// The later hour of the offending pair.
    pub hour: u8,
    /// Human-readable description.
    pub message: String,
}

impl ScheduleWarning {
    /// Records an online session back-to-back with an in-person one.
    pub fn mode_switch(day: Day, boundary_hour: u8) -> Self {
        Self {
            day,
            hour: boundary_hour,
            message: format!(
                "online and in-person sessions are back-to-back around {day:?} {boundary_hour}:00"
            ),
        }
    }
}

/// Everything a validation pass found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Hard defects. Any entry makes the timetable invalid.
    pub violations: Vec<Violation>,
    /// Soft findings. These never fail the report.
    pub warnings: Vec<ScheduleWarning>,
}

impl ValidationReport {
    /// True when no violations were found.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Validates a committed timetable against the roster it was built from.
///
/// Checks:
/// 1. No instructor is in two rooms during the same hour
/// 2. Every course's grid hours equal its weekly requirement (a course
///    the allocator skipped fails here)
/// 3. No course runs more than the consecutive-hour limit on one day,
///    counting adjacency across separately committed sessions
/// 4. Every occupied cell sits inside weekday working hours, unless the
///    instructor's preference window covers it
/// 5. (warning) No online hour directly borders an in-person hour
///
/// Checks never abort early; the report carries every finding.
pub fn validate(
    timetable: &Timetable,
    courses: &[Course],
    instructors: &[Instructor],
) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_double_booking(timetable, &mut report.violations);
    check_course_hours(timetable, courses, &mut report.violations);
    check_consecutive_runs(timetable, &mut report.violations);
    check_working_hours(timetable, instructors, &mut report.violations);
    check_mode_adjacency(timetable, &mut report.warnings);

    for violation in &report.violations {
        warn!("{}", violation.message);
    }
    info!(
        "validation: {} violations, {} warnings",
        report.violations.len(),
        report.warnings.len()
    );

    report
}

/// An instructor may hold at most one room per hour.
fn check_double_booking(timetable: &Timetable, out: &mut Vec<Violation>) {
    let mut rooms_by_cell: BTreeMap<(Day, u8, &str), Vec<&str>> = BTreeMap::new();
    for (day, hour, room, occupant) in timetable.cells() {
        rooms_by_cell
            .entry((day, hour, occupant.instructor_id.as_str()))
            .or_default()
            .push(room);
    }

    for ((day, hour, instructor_id), rooms) in rooms_by_cell {
        if rooms.len() > 1 {
            out.push(Violation::double_booked(instructor_id, day, hour, &rooms));
        }
    }
}

/// Grid hours per course must equal the declared weekly hours.
fn check_course_hours(timetable: &Timetable, courses: &[Course], out: &mut Vec<Violation>) {
    let mut committed: HashMap<&str, u8> = HashMap::new();
    for (_, _, _, occupant) in timetable.cells() {
        *committed.entry(occupant.course_id.as_str()).or_default() += 1;
    }

    for course in courses {
        let hours = committed.get(course.id.as_str()).copied().unwrap_or(0);
        if hours != course.hours_per_week {
            out.push(Violation::hour_mismatch(
                &course.id,
                course.hours_per_week,
                hours,
            ));
        }
    }
}

/// Maximal same-day runs per course, walked across session boundaries.
///
/// Two sessions committed separately but touching (one ends where the
/// next starts) form a single run, which is exactly the case a
/// placement-time pairwise check can miss.
fn check_consecutive_runs(timetable: &Timetable, out: &mut Vec<Violation>) {
    // Cell iteration is day-then-hour ordered, so hours arrive ascending.
    let mut hours_by_course_day: BTreeMap<(&str, Day), Vec<u8>> = BTreeMap::new();
    for (day, hour, _, occupant) in timetable.cells() {
        let hours = hours_by_course_day
            .entry((occupant.course_id.as_str(), day))
            .or_default();
        if hours.last() != Some(&hour) {
            hours.push(hour);
        }
    }

    for ((course_id, day), hours) in &hours_by_course_day {
        // hour minus position is constant within a consecutive run
        let runs = hours
            .iter()
            .enumerate()
            .chunk_by(|&(pos, &hour)| i16::from(hour) - pos as i16);
        for (_, run) in &runs {
            let run: Vec<u8> = run.map(|(_, &hour)| hour).collect();
            if run.len() > usize::from(MAX_CONSECUTIVE_HOURS) {
                out.push(Violation::consecutive_exceeded(
                    *course_id, *day, run[0], run.len(),
                ));
            }
        }
    }
}

/// Cells outside weekday working hours need a covering preference.
fn check_working_hours(
    timetable: &Timetable,
    instructors: &[Instructor],
    out: &mut Vec<Violation>,
) {
    let by_id: HashMap<&str, &Instructor> = instructors
        .iter()
        .map(|inst| (inst.id.as_str(), inst))
        .collect();

    for (day, hour, _, occupant) in timetable.cells() {
        let in_window =
            !day.is_weekend() && (WORKDAY_START_HOUR..WORKDAY_END_HOUR).contains(&hour);
        if in_window {
            continue;
        }

        let excused = by_id
            .get(occupant.instructor_id.as_str())
            .is_some_and(|inst| inst.prefers(day, hour, hour + 1));
        if !excused {
            out.push(Violation::outside_hours(
                &occupant.course_id,
                &occupant.instructor_id,
                day,
                hour,
            ));
        }
    }
}

/// Flags hour boundaries where online and in-person sessions touch,
/// anywhere in the grid.
fn check_mode_adjacency(timetable: &Timetable, out: &mut Vec<ScheduleWarning>) {
    for day in Day::WEEK {
        for hour in GRID_START_HOUR..GRID_END_HOUR - 1 {
            let mut online_now = false;
            let mut onsite_now = false;
            for (_, occupant) in timetable.occupants_at(day, hour) {
                online_now |= occupant.is_online;
                onsite_now |= !occupant.is_online;
            }
            let mut online_next = false;
            let mut onsite_next = false;
            for (_, occupant) in timetable.occupants_at(day, hour + 1) {
                online_next |= occupant.is_online;
                onsite_next |= !occupant.is_online;
            }

            if (online_now && onsite_next) || (onsite_now && online_next) {
                out.push(ScheduleWarning::mode_switch(day, hour + 1));
            }
        }
    }
}
