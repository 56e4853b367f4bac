//! Hard-constraint predicates.
//!
//! Pure functions deciding whether a (course, slot) candidate is legal.
//! The allocator filters candidates through these before scoring; a
//! rejection here is never overridden by a good score.

use crate::models::{
    Classroom, Course, Day, Instructor, Timetable, MAX_CONSECUTIVE_HOURS, WORKDAY_END_HOUR,
    WORKDAY_START_HOUR,
};

/// Whether the instructor may teach `[start_hour, end_hour)` on `day`.
///
/// A span inside one of a part-time instructor's preferred intervals is
/// exempt from the default restriction (weekday, 08:00–17:00). Declared
/// unavailable intervals and already-occupied timetable hours reject the
/// span in either case.
pub fn instructor_available(
    instructor: &Instructor,
    timetable: &Timetable,
    day: Day,
    start_hour: u8,
    end_hour: u8,
) -> bool {
    if !instructor.prefers(day, start_hour, end_hour) {
        if day.is_weekend() {
            return false;
        }
        if start_hour < WORKDAY_START_HOUR || end_hour > WORKDAY_END_HOUR {
            return false;
        }
    }

    if instructor.is_blocked(day, start_hour, end_hour) {
        return false;
    }

    !timetable.instructor_busy(&instructor.id, day, start_hour, end_hour)
}

/// Whether the classroom is unoccupied for the whole span.
pub fn classroom_available(
    classroom: &Classroom,
    timetable: &Timetable,
    day: Day,
    start_hour: u8,
    end_hour: u8,
) -> bool {
    (start_hour..end_hour).all(|hour| timetable.is_free(day, hour, &classroom.id))
}

/// Whether the classroom seats the whole course.
#[inline]
pub fn capacity_ok(course: &Course, classroom: &Classroom) -> bool {
    classroom.capacity >= course.student_count
}

/// Whether the classroom's type suits the course.
///
/// Computer-based courses (matched by name) must land in a computer lab;
/// any other course accepts any room.
#[inline]
pub fn type_ok(course: &Course, classroom: &Classroom) -> bool {
    !course.is_computer_course() || classroom.is_computer_lab()
}

/// Whether committing `[start_hour, start_hour + duration)` on `day` would
/// break the consecutive-hour cap for this course.
///
/// Checked pairwise against each committed same-day interval sharing a
/// boundary with the new one; non-adjacent same-day placement passes. With
/// nothing committed on the day yet, a single over-long session is rejected
/// directly. The post-hoc checker walks full adjacency chains instead,
/// which is strictly stronger.
pub fn exceeds_consecutive_limit(course: &Course, day: Day, start_hour: u8, duration: u8) -> bool {
    let end_hour = start_hour + duration;
    let mut committed_on_day = false;

    for slot in course.scheduled_slots.iter().filter(|s| s.day == day) {
        committed_on_day = true;
        // Existing interval running into the new one
        if slot.end_hour == start_hour && slot.duration() + duration > MAX_CONSECUTIVE_HOURS {
            return true;
        }
        // New interval running into an existing one
        if end_hour == slot.start_hour && duration + slot.duration() > MAX_CONSECUTIVE_HOURS {
            return true;
        }
    }

    !committed_on_day && duration > MAX_CONSECUTIVE_HOURS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Occupant, TimeSlot};

    fn part_timer(id: &str) -> Instructor {
        Instructor::new(id).with_part_time(true)
    }

    #[test]
    fn test_full_time_default_window() {
        let inst = Instructor::new("I1");
        let table = Timetable::new();

        assert!(instructor_available(&inst, &table, Day::Monday, 9, 12));
        assert!(instructor_available(&inst, &table, Day::Friday, 8, 17));
        assert!(!instructor_available(&inst, &table, Day::Monday, 7, 9)); // before 08:00
        assert!(!instructor_available(&inst, &table, Day::Monday, 15, 18)); // past 17:00
        assert!(!instructor_available(&inst, &table, Day::Saturday, 9, 12));
    }

    #[test]
    fn test_preferred_interval_relaxes_default() {
        // Weekday-daytime span passes via the default rule even without a
        // covering preferred interval; a weekend span needs one.
        let inst = part_timer("I1").with_preferred(Day::Monday, 8, 12);
        let table = Timetable::new();

        assert!(instructor_available(&inst, &table, Day::Tuesday, 9, 12));
        assert!(!instructor_available(&inst, &table, Day::Saturday, 9, 12));

        let weekender = part_timer("I2").with_preferred(Day::Saturday, 9, 12);
        assert!(instructor_available(&weekender, &table, Day::Saturday, 9, 12));
        assert!(instructor_available(&weekender, &table, Day::Saturday, 10, 12));
        assert!(!instructor_available(&weekender, &table, Day::Saturday, 9, 13));
    }

    #[test]
    fn test_preferred_evening_hours() {
        let inst = part_timer("I1").with_preferred(Day::Wednesday, 18, 21);
        let table = Timetable::new();

        assert!(instructor_available(&inst, &table, Day::Wednesday, 18, 21));
        // Outside the preferred window the default 08:00-17:00 rule applies
        assert!(!instructor_available(&inst, &table, Day::Wednesday, 17, 20));
    }

    #[test]
    fn test_unavailable_overrides_preferred() {
        let inst = part_timer("I1")
            .with_preferred(Day::Monday, 8, 12)
            .with_unavailable(Day::Monday, 9, 11);
        let table = Timetable::new();

        assert!(!instructor_available(&inst, &table, Day::Monday, 9, 11));
        assert!(!instructor_available(&inst, &table, Day::Monday, 10, 12));
        assert!(instructor_available(&inst, &table, Day::Monday, 8, 9));
        assert!(instructor_available(&inst, &table, Day::Monday, 11, 12));
    }

    #[test]
    fn test_busy_instructor_rejected() {
        let inst = Instructor::new("I1");
        let mut table = Timetable::new();
        table.commit(
            TimeSlot::new(Day::Monday, 9, 11),
            "R1",
            Occupant::new("C1", "I1", false),
        );

        assert!(!instructor_available(&inst, &table, Day::Monday, 10, 12));
        assert!(instructor_available(&inst, &table, Day::Monday, 11, 13));
        assert!(instructor_available(&inst, &table, Day::Tuesday, 9, 11));
    }

    #[test]
    fn test_classroom_available() {
        let room = Classroom::new("R1").with_capacity(30);
        let mut table = Timetable::new();
        table.commit(
            TimeSlot::new(Day::Monday, 9, 11),
            "R1",
            Occupant::new("C1", "I1", false),
        );

        assert!(!classroom_available(&room, &table, Day::Monday, 10, 12));
        assert!(!classroom_available(&room, &table, Day::Monday, 8, 10));
        assert!(classroom_available(&room, &table, Day::Monday, 11, 13));
        assert!(classroom_available(&room, &table, Day::Tuesday, 9, 11));

        let other = Classroom::new("R2").with_capacity(30);
        assert!(classroom_available(&other, &table, Day::Monday, 9, 11));
    }

    #[test]
    fn test_capacity_ok() {
        let room = Classroom::new("R1").with_capacity(30);
        assert!(capacity_ok(&Course::new("C1").with_student_count(30), &room));
        assert!(capacity_ok(&Course::new("C2").with_student_count(10), &room));
        assert!(!capacity_ok(&Course::new("C3").with_student_count(31), &room));
    }

    #[test]
    fn test_type_ok() {
        let lecture = Classroom::new("R1").with_capacity(40);
        let lab = Classroom::new("CL1")
            .with_capacity(25)
            .with_room_type(Classroom::COMPUTER_LAB);

        let programming = Course::new("C1").with_name("Computer Programming");
        let calculus = Course::new("C2").with_name("Calculus I");

        assert!(!type_ok(&programming, &lecture));
        assert!(type_ok(&programming, &lab));
        assert!(type_ok(&calculus, &lecture));
        assert!(type_ok(&calculus, &lab));
    }

    #[test]
    fn test_consecutive_limit_first_session() {
        let course = Course::new("C1");
        assert!(!exceeds_consecutive_limit(&course, Day::Monday, 8, 4));
        assert!(exceeds_consecutive_limit(&course, Day::Monday, 8, 5));
    }

    #[test]
    fn test_consecutive_limit_adjacent() {
        let mut course = Course::new("C1");
        course.scheduled_slots.push(TimeSlot::new(Day::Monday, 8, 10));

        // 2h committed + 3h appended after = 5h run
        assert!(exceeds_consecutive_limit(&course, Day::Monday, 10, 3));
        // 2h + 2h = exactly the cap
        assert!(!exceeds_consecutive_limit(&course, Day::Monday, 10, 2));
        // Prepending into 8-10: 5-8 makes a 5h run, 6-8 exactly 4h
        assert!(exceeds_consecutive_limit(&course, Day::Monday, 5, 3));
        assert!(!exceeds_consecutive_limit(&course, Day::Monday, 6, 2));
    }

    #[test]
    fn test_consecutive_limit_non_adjacent_passes() {
        let mut course = Course::new("C1");
        course.scheduled_slots.push(TimeSlot::new(Day::Monday, 8, 10));

        // Gap at 10-12, no shared boundary
        assert!(!exceeds_consecutive_limit(&course, Day::Monday, 12, 3));
        // Other days are independent
        assert!(!exceeds_consecutive_limit(&course, Day::Tuesday, 10, 3));
    }
}
