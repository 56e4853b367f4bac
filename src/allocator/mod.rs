//! Greedy slot allocation.
//!
//! # Algorithm
//!
//! 1. Sort courses by descending (weekly hours, student count): heavy,
//!    large courses are hardest to place later, so they go first.
//! 2. Resolve each course's instructor and classroom references; a course
//!    whose reference is missing or whose room fails capacity/type checks
//!    is skipped with a diagnostic.
//! 3. Place sessions one at a time: scan every day and legal start hour,
//!    hard-filter through the availability predicates, score survivors,
//!    and commit the cheapest candidate (ties go to the earliest day,
//!    then the earliest hour).
//! 4. When no candidate fits, shrink the session length and retry; at
//!    zero length, record the shortfall and move to the next course.
//!
//! Single-pass: a committed session is never revisited or swapped out,
//! even if a later course is squeezed out by it. No global optimum is
//! sought.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

mod availability;
mod scoring;
mod summary;

pub use availability::{
    capacity_ok, classroom_available, exceeds_consecutive_limit, instructor_available, type_ok,
};
pub use scoring::slot_score;
pub use summary::AllocationSummary;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{
    Classroom, Course, Day, Instructor, Occupant, ScheduleEntry, TimeSlot, Timetable,
    DEFAULT_SESSION_HOURS, GRID_START_HOUR, MAX_CONSECUTIVE_HOURS, SEARCH_END_HOUR,
};

/// Why a course could not be (fully) scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticKind {
    /// The course references an instructor or classroom that does not exist.
    UnresolvedReference,
    /// The assigned classroom seats fewer students than enrolled.
    CapacityExceeded,
    /// The assigned classroom's type does not suit the course.
    RoomTypeMismatch,
    /// Some weekly hours could not be placed at any session length.
    Shortfall {
        /// Hours successfully committed.
        placed_hours: u8,
        /// Hours required per week.
        requested_hours: u8,
    },
}

/// A non-fatal problem recorded while allocating.
///
/// Diagnostics accompany the outcome instead of aborting it: an
/// unschedulable course is reported and skipped, never raised as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationDiagnostic {
    /// Problem category.
    pub kind: DiagnosticKind,
    /// The affected course.
    pub course_id: String,
    /// Human-readable description.
    pub detail: String,
}

impl AllocationDiagnostic {
    /// Records a dangling instructor or classroom reference.
    pub fn unresolved_reference(course_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::UnresolvedReference,
            course_id: course_id.into(),
            detail: detail.into(),
        }
    }

    /// Records an over-capacity room assignment.
    pub fn capacity_exceeded(course_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::CapacityExceeded,
            course_id: course_id.into(),
            detail: detail.into(),
        }
    }

    /// Records a room whose type does not suit the course.
    pub fn room_type_mismatch(course_id: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::RoomTypeMismatch,
            course_id: course_id.into(),
            detail: detail.into(),
        }
    }

    /// Records weekly hours left unplaced.
    pub fn shortfall(course_id: impl Into<String>, placed_hours: u8, requested_hours: u8) -> Self {
        Self {
            kind: DiagnosticKind::Shortfall {
                placed_hours,
                requested_hours,
            },
            course_id: course_id.into(),
            detail: format!("only {placed_hours} of {requested_hours} weekly hours could be placed"),
        }
    }
}

/// Everything a finished allocation run produces.
///
/// Entity lists come back with the allocator's bookkeeping filled in
/// (`scheduled_slots`, `assigned_courses`); the timetable is the authority
/// on conflicts.
#[derive(Debug, Clone)]
pub struct AllocationOutcome {
    /// Courses, with committed intervals appended.
    pub courses: Vec<Course>,
    /// Instructors, with assigned courses appended.
    pub instructors: Vec<Instructor>,
    /// Classrooms, unchanged.
    pub classrooms: Vec<Classroom>,
    /// The committed grid.
    pub timetable: Timetable,
    /// Problems encountered, in emission order.
    pub diagnostics: Vec<AllocationDiagnostic>,
}

impl AllocationOutcome {
    /// Flattens the committed timetable into consumer-facing entries, in
    /// day-then-hour-then-room order.
    pub fn entries(&self) -> Vec<ScheduleEntry> {
        self.timetable
            .entries(&self.courses, &self.instructors, &self.classrooms)
    }
}

/// Single-pass greedy allocator.
///
/// # Example
///
/// ```
/// use timetabler::allocator::GreedyAllocator;
/// use timetabler::models::{Classroom, Course, Instructor};
///
/// let courses = vec![Course::new("C1")
///     .with_name("Calculus I")
///     .with_instructor("I1")
///     .with_classroom("R1")
///     .with_hours_per_week(3)
///     .with_student_count(30)];
/// let instructors = vec![Instructor::new("I1").with_name("Dr. Smith")];
/// let classrooms = vec![Classroom::new("R1").with_capacity(40)];
///
/// let outcome = GreedyAllocator::new().allocate(courses, instructors, classrooms);
/// assert_eq!(outcome.timetable.occupied_count(), 3);
/// assert!(outcome.diagnostics.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyAllocator;

impl GreedyAllocator {
    /// Creates a new allocator.
    pub fn new() -> Self {
        Self
    }

    /// Runs the greedy assignment over all courses.
    ///
    /// Consumes the entity lists and returns them in the outcome with the
    /// bookkeeping filled in, alongside the committed timetable and any
    /// diagnostics.
    pub fn allocate(
        &self,
        mut courses: Vec<Course>,
        mut instructors: Vec<Instructor>,
        classrooms: Vec<Classroom>,
    ) -> AllocationOutcome {
        let mut timetable = Timetable::new();
        let mut diagnostics: Vec<AllocationDiagnostic> = Vec::new();

        // Resolve back-references once; courses carry IDs, not owners.
        let instructor_index: HashMap<String, usize> = instructors
            .iter()
            .enumerate()
            .map(|(pos, inst)| (inst.id.clone(), pos))
            .collect();
        let classroom_index: HashMap<String, usize> = classrooms
            .iter()
            .enumerate()
            .map(|(pos, room)| (room.id.clone(), pos))
            .collect();

        info!(
            "allocating {} courses across {} classrooms",
            courses.len(),
            classrooms.len()
        );

        for course_pos in schedule_order(&courses) {
            let course = &mut courses[course_pos];

            let instructor_pos = match instructor_index.get(&course.instructor_id) {
                Some(&pos) => pos,
                None => {
                    let diag = AllocationDiagnostic::unresolved_reference(
                        &course.id,
                        format!("unknown instructor '{}'", course.instructor_id),
                    );
                    warn!("course {}: {}", diag.course_id, diag.detail);
                    diagnostics.push(diag);
                    continue;
                }
            };
            let classroom = match classroom_index.get(&course.classroom_id) {
                Some(&pos) => &classrooms[pos],
                None => {
                    let diag = AllocationDiagnostic::unresolved_reference(
                        &course.id,
                        format!("unknown classroom '{}'", course.classroom_id),
                    );
                    warn!("course {}: {}", diag.course_id, diag.detail);
                    diagnostics.push(diag);
                    continue;
                }
            };

            if !capacity_ok(course, classroom) {
                let diag = AllocationDiagnostic::capacity_exceeded(
                    &course.id,
                    format!(
                        "{} students exceed capacity {} of {}",
                        course.student_count, classroom.capacity, classroom.id
                    ),
                );
                warn!("course {}: {}", diag.course_id, diag.detail);
                diagnostics.push(diag);
                continue;
            }

            if !type_ok(course, classroom) {
                let diag = AllocationDiagnostic::room_type_mismatch(
                    &course.id,
                    format!("'{}' is not a computer lab", classroom.id),
                );
                warn!("course {}: {}", diag.course_id, diag.detail);
                diagnostics.push(diag);
                continue;
            }

            let unplaced = place_course(
                course,
                &mut instructors[instructor_pos],
                classroom,
                &mut timetable,
            );
            if unplaced > 0 {
                let placed = course.hours_per_week - unplaced;
                let diag = AllocationDiagnostic::shortfall(&course.id, placed, course.hours_per_week);
                warn!("course {}: {}", diag.course_id, diag.detail);
                diagnostics.push(diag);
            }
        }

        info!(
            "allocation done: {} hour cells committed, {} diagnostics",
            timetable.occupied_count(),
            diagnostics.len()
        );

        AllocationOutcome {
            courses,
            instructors,
            classrooms,
            timetable,
            diagnostics,
        }
    }
}

/// Processing order: descending weekly hours, then descending student
/// count. The sort is stable, so input order breaks remaining ties.
fn schedule_order(courses: &[Course]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..courses.len()).collect();
    order.sort_by(|&a, &b| {
        (courses[b].hours_per_week, courses[b].student_count)
            .cmp(&(courses[a].hours_per_week, courses[a].student_count))
    });
    order
}

/// A legal (day, start, duration) triple with its score.
struct Candidate {
    day: Day,
    start_hour: u8,
    duration: u8,
    score: u32,
}

/// Scans every day and legal start hour for the cheapest legal session.
///
/// Candidates are collected in day-then-hour scan order and the sort is
/// stable, so the earliest candidate wins score ties.
fn best_candidate(
    course: &Course,
    instructor: &Instructor,
    classroom: &Classroom,
    timetable: &Timetable,
    session_hours: u8,
    hours_left: u8,
) -> Option<Candidate> {
    let mut candidates = Vec::new();

    for day in Day::WEEK {
        let committed = course.hours_on_day(day);
        if committed >= MAX_CONSECUTIVE_HOURS {
            continue;
        }
        // Daily headroom and remaining need both cap the session length
        let duration = session_hours
            .min(MAX_CONSECUTIVE_HOURS - committed)
            .min(hours_left);

        for start_hour in GRID_START_HOUR..(SEARCH_END_HOUR - duration) {
            let end_hour = start_hour + duration;
            if !instructor_available(instructor, timetable, day, start_hour, end_hour) {
                continue;
            }
            if !classroom_available(classroom, timetable, day, start_hour, end_hour) {
                continue;
            }
            if exceeds_consecutive_limit(course, day, start_hour, duration) {
                continue;
            }

            let score = slot_score(timetable, course, instructor, day, start_hour, duration);
            candidates.push(Candidate {
                day,
                start_hour,
                duration,
                score,
            });
        }
    }

    candidates.sort_by_key(|c| c.score);
    candidates.into_iter().next()
}

/// Places sessions for one course until its weekly hours are covered or no
/// legal slot remains. Returns the hours left unplaced.
fn place_course(
    course: &mut Course,
    instructor: &mut Instructor,
    classroom: &Classroom,
    timetable: &mut Timetable,
) -> u8 {
    let mut hours_left = course.hours_per_week;
    let mut session_hours = DEFAULT_SESSION_HOURS
        .min(MAX_CONSECUTIVE_HOURS)
        .min(hours_left);

    while hours_left > 0 {
        let found = best_candidate(
            course,
            instructor,
            classroom,
            timetable,
            session_hours,
            hours_left,
        );

        match found {
            Some(candidate) => {
                let slot = TimeSlot::new(
                    candidate.day,
                    candidate.start_hour,
                    candidate.start_hour + candidate.duration,
                );
                timetable.commit(
                    slot,
                    &classroom.id,
                    Occupant::new(&course.id, &instructor.id, course.is_online),
                );
                course.scheduled_slots.push(slot);
                if !instructor.assigned_courses.contains(&course.id) {
                    instructor.assigned_courses.push(course.id.clone());
                }
                hours_left -= candidate.duration;
                debug!(
                    "course {}: committed {:?} {}-{} in {} (score {})",
                    course.id, slot.day, slot.start_hour, slot.end_hour, classroom.id, candidate.score
                );
            }
            None => {
                session_hours -= 1;
                if session_hours == 0 {
                    break;
                }
            }
        }
    }

    hours_left
}
