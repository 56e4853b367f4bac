//! Candidate slot scoring.
//!
//! Ranks otherwise-legal (course, slot) candidates; lower is better. A
//! score never overrides a hard rejection; the allocator filters through
//! the availability predicates before scoring.
//!
//! # Cost terms
//!
//! | Term | Cost |
//! |------|------|
//! | Day position | 10 per day after Monday |
//! | Hour position | 1 per hour after 08:00 |
//! | Part-time preference miss | +100 |
//! | Delivery-mode switch at a boundary | +50 each |
//! | Consecutive-hour breach | +1000 |

use crate::models::{
    Course, Day, Instructor, Timetable, GRID_START_HOUR, WORKDAY_END_HOUR, WORKDAY_START_HOUR,
};

use super::availability::exceeds_consecutive_limit;

/// Cost per day after Monday.
const DAY_WEIGHT: u32 = 10;
/// Penalty when a part-time instructor declares preferred intervals and the
/// span misses all of them.
const PREFERENCE_MISS_PENALTY: u32 = 100;
/// Penalty per bordering hour whose occupants differ in delivery mode.
const MODE_SWITCH_PENALTY: u32 = 50;
/// Penalty for breaking the consecutive-hour cap. The allocator filters
/// such candidates out beforehand; the term stays in case filtering is
/// ever relaxed.
const CONSECUTIVE_PENALTY: u32 = 1000;

/// Scores a candidate session; lower is better.
///
/// Earlier days and earlier hours are cheapest. Penalties stack on top for
/// missed part-time preferences, delivery-mode switches against adjacent
/// sessions in any room, and consecutive-hour breaches.
pub fn slot_score(
    timetable: &Timetable,
    course: &Course,
    instructor: &Instructor,
    day: Day,
    start_hour: u8,
    duration: u8,
) -> u32 {
    let end_hour = start_hour + duration;
    let mut score = DAY_WEIGHT * u32::from(day.index())
        + u32::from(start_hour).saturating_sub(u32::from(GRID_START_HOUR));

    if instructor.is_part_time
        && !instructor.preferred_slots.is_empty()
        && !instructor.prefers(day, start_hour, end_hour)
    {
        score += PREFERENCE_MISS_PENALTY;
    }

    // The hour before the span and the hour after it, clipped to the
    // 08:00-17:00 window: mixing online and in-person back-to-back is
    // discouraged across all rooms.
    for hour in [start_hour.checked_sub(1), Some(end_hour)]
        .into_iter()
        .flatten()
    {
        if (WORKDAY_START_HOUR..WORKDAY_END_HOUR).contains(&hour)
            && timetable
                .occupants_at(day, hour)
                .any(|(_, occ)| occ.is_online != course.is_online)
        {
            score += MODE_SWITCH_PENALTY;
        }
    }

    if exceeds_consecutive_limit(course, day, start_hour, duration) {
        score += CONSECUTIVE_PENALTY;
    }

    score
}
