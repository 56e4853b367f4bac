//! Allocation run summary.
//!
//! Condenses an [`AllocationOutcome`] into the totals an operator or a
//! submission adapter cares about: how many courses landed fully, which
//! fell short, and how loaded each room is.

use itertools::Itertools;
use serde::Serialize;
use std::collections::BTreeMap;

use super::{AllocationOutcome, DiagnosticKind};

/// Aggregated result of one allocation run.
#[derive(Debug, Clone, Serialize)]
pub struct AllocationSummary {
    /// Courses in the input.
    pub total_courses: usize,
    /// Courses whose full weekly hours were committed.
    pub fully_scheduled: usize,
    /// Courses with some but not all hours committed.
    pub partially_scheduled: usize,
    /// Courses with no hours committed.
    pub unscheduled: usize,
    /// Weekly hours requested across all courses.
    pub requested_hours: u32,
    /// Hours committed to the timetable.
    pub committed_hours: u32,
    /// Occupied hours per room, by room ID.
    pub hours_by_room: BTreeMap<String, u32>,
    /// Courses reported short, in diagnostic order.
    pub shortfall_courses: Vec<String>,
}

impl AllocationSummary {
    /// Computes the summary for a finished run.
    pub fn calculate(outcome: &AllocationOutcome) -> Self {
        let mut fully_scheduled = 0;
        let mut partially_scheduled = 0;
        let mut unscheduled = 0;
        let mut requested_hours: u32 = 0;
        let mut committed_hours: u32 = 0;

        for course in &outcome.courses {
            let requested = u32::from(course.hours_per_week);
            let committed = u32::from(course.committed_hours());
            requested_hours += requested;
            committed_hours += committed;

            if committed == 0 && requested > 0 {
                unscheduled += 1;
            } else if committed < requested {
                partially_scheduled += 1;
            } else {
                fully_scheduled += 1;
            }
        }

        let hours_by_room: BTreeMap<String, u32> = outcome
            .timetable
            .cells()
            .counts_by(|(_, _, room, _)| room.to_string())
            .into_iter()
            .map(|(room, hours)| (room, hours as u32))
            .collect();

        let shortfall_courses = outcome
            .diagnostics
            .iter()
            .filter(|d| matches!(d.kind, DiagnosticKind::Shortfall { .. }))
            .map(|d| d.course_id.clone())
            .collect();

        Self {
            total_courses: outcome.courses.len(),
            fully_scheduled,
            partially_scheduled,
            unscheduled,
            requested_hours,
            committed_hours,
            hours_by_room,
            shortfall_courses,
        }
    }
}
