//! Timetable store.
//!
//! The central (day × hour × room) grid. Cells are written only by the
//! allocator, one committed session at a time, and never overwritten or
//! withdrawn; every checker reads the same store.
//!
//! Iteration order is day-then-hour-then-room throughout, which makes the
//! exported entry list deterministic.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::{Classroom, Course, Day, Instructor, TimeSlot};

/// The (course, instructor) pair stored in one timetable cell.
///
/// The delivery mode is denormalized from the course so adjacency queries
/// need no course lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupant {
    /// Hosted course.
    pub course_id: String,
    /// Teaching instructor.
    pub instructor_id: String,
    /// Delivery mode of the hosted course.
    pub is_online: bool,
}

impl Occupant {
    /// Creates a new occupant.
    pub fn new(
        course_id: impl Into<String>,
        instructor_id: impl Into<String>,
        is_online: bool,
    ) -> Self {
        Self {
            course_id: course_id.into(),
            instructor_id: instructor_id.into(),
            is_online,
        }
    }
}

/// One occupied hour of the committed timetable, flattened for consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day of the session hour.
    pub day: Day,
    /// The hour (e.g. 9 means 09:00–10:00).
    pub hour: u8,
    /// Hosted course ID.
    pub course_id: String,
    /// Hosted course name.
    pub course_name: String,
    /// Course section label.
    pub section: String,
    /// Teaching instructor ID.
    pub instructor_id: String,
    /// Teaching instructor name.
    pub instructor_name: String,
    /// Classroom ID.
    pub room_id: String,
    /// Classroom name.
    pub room_name: String,
    /// Delivery mode.
    pub is_online: bool,
}

/// The weekly (day × hour × room) → occupant grid.
///
/// Starts empty and grows monotonically: [`Timetable::commit`] is the only
/// write path, and it refuses (by debug assertion) to overwrite a cell;
/// callers check availability first. At most one occupant ever exists per
/// (day, hour, room) triple.
#[derive(Debug, Clone, Default)]
pub struct Timetable {
    /// (day, hour) → room → occupant.
    slots: BTreeMap<(Day, u8), BTreeMap<String, Occupant>>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `occupant` into every hour of `slot` for one room.
    pub fn commit(&mut self, slot: TimeSlot, classroom_id: &str, occupant: Occupant) {
        for hour in slot.hours() {
            let previous = self
                .slots
                .entry((slot.day, hour))
                .or_default()
                .insert(classroom_id.to_string(), occupant.clone());
            debug_assert!(previous.is_none(), "timetable cell already occupied");
        }
    }

    /// Whether a (day, hour, room) cell is unoccupied.
    pub fn is_free(&self, day: Day, hour: u8, classroom_id: &str) -> bool {
        self.slots
            .get(&(day, hour))
            .map_or(true, |rooms| !rooms.contains_key(classroom_id))
    }

    /// All occupants at one (day, hour), as (room ID, occupant) pairs in
    /// room order.
    pub fn occupants_at(&self, day: Day, hour: u8) -> impl Iterator<Item = (&str, &Occupant)> {
        self.slots
            .get(&(day, hour))
            .into_iter()
            .flat_map(|rooms| rooms.iter().map(|(room, occ)| (room.as_str(), occ)))
    }

    /// Whether the instructor occupies any room during `[start_hour, end_hour)`.
    ///
    /// This is the derived conflict check: it reads the grid, not the
    /// instructor's bookkeeping.
    pub fn instructor_busy(
        &self,
        instructor_id: &str,
        day: Day,
        start_hour: u8,
        end_hour: u8,
    ) -> bool {
        (start_hour..end_hour).any(|hour| {
            self.occupants_at(day, hour)
                .any(|(_, occ)| occ.instructor_id == instructor_id)
        })
    }

    /// All occupied cells in day-then-hour-then-room order.
    pub fn cells(&self) -> impl Iterator<Item = (Day, u8, &str, &Occupant)> {
        self.slots.iter().flat_map(|(&(day, hour), rooms)| {
            rooms
                .iter()
                .map(move |(room, occ)| (day, hour, room.as_str(), occ))
        })
    }

    /// Number of occupied (day, hour, room) cells.
    pub fn occupied_count(&self) -> usize {
        self.slots.values().map(BTreeMap::len).sum()
    }

    /// Whether no cell is occupied.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Flattens the store into one entry per occupied hour, in
    /// day-then-hour-then-room order.
    ///
    /// Cells whose IDs are absent from the given entity lists are skipped;
    /// cells committed by the allocator always resolve against the lists it
    /// was run with.
    pub fn entries(
        &self,
        courses: &[Course],
        instructors: &[Instructor],
        classrooms: &[Classroom],
    ) -> Vec<ScheduleEntry> {
        let course_by_id: HashMap<&str, &Course> =
            courses.iter().map(|c| (c.id.as_str(), c)).collect();
        let instructor_by_id: HashMap<&str, &Instructor> =
            instructors.iter().map(|i| (i.id.as_str(), i)).collect();
        let room_by_id: HashMap<&str, &Classroom> =
            classrooms.iter().map(|r| (r.id.as_str(), r)).collect();

        self.cells()
            .filter_map(|(day, hour, room_id, occ)| {
                let course = course_by_id.get(occ.course_id.as_str())?;
                let instructor = instructor_by_id.get(occ.instructor_id.as_str())?;
                let room = room_by_id.get(room_id)?;
                Some(ScheduleEntry {
                    day,
                    hour,
                    course_id: course.id.clone(),
                    course_name: course.name.clone(),
                    section: course.section.clone(),
                    instructor_id: instructor.id.clone(),
                    instructor_name: instructor.name.clone(),
                    room_id: room.id.clone(),
                    room_name: room.name.clone(),
                    is_online: occ.is_online,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occ(course: &str, instructor: &str) -> Occupant {
        Occupant::new(course, instructor, false)
    }

    #[test]
    fn test_commit_and_queries() {
        let mut table = Timetable::new();
        table.commit(TimeSlot::new(Day::Monday, 8, 11), "R1", occ("C1", "I1"));

        assert!(!table.is_free(Day::Monday, 8, "R1"));
        assert!(!table.is_free(Day::Monday, 10, "R1"));
        assert!(table.is_free(Day::Monday, 11, "R1")); // exclusive end
        assert!(table.is_free(Day::Monday, 8, "R2"));
        assert!(table.is_free(Day::Tuesday, 8, "R1"));
        assert_eq!(table.occupied_count(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_instructor_busy_is_derived() {
        let mut table = Timetable::new();
        table.commit(TimeSlot::new(Day::Monday, 9, 11), "R1", occ("C1", "I1"));

        assert!(table.instructor_busy("I1", Day::Monday, 10, 12));
        assert!(table.instructor_busy("I1", Day::Monday, 8, 10));
        assert!(!table.instructor_busy("I1", Day::Monday, 11, 13));
        assert!(!table.instructor_busy("I1", Day::Tuesday, 9, 11));
        assert!(!table.instructor_busy("I2", Day::Monday, 9, 11));
    }

    #[test]
    fn test_occupants_at_multiple_rooms() {
        let mut table = Timetable::new();
        table.commit(TimeSlot::new(Day::Monday, 9, 10), "R2", occ("C2", "I2"));
        table.commit(TimeSlot::new(Day::Monday, 9, 10), "R1", occ("C1", "I1"));

        let at_nine: Vec<_> = table.occupants_at(Day::Monday, 9).collect();
        assert_eq!(at_nine.len(), 2);
        // Room order regardless of commit order
        assert_eq!(at_nine[0].0, "R1");
        assert_eq!(at_nine[1].0, "R2");
        assert_eq!(table.occupants_at(Day::Monday, 10).count(), 0);
    }

    #[test]
    fn test_cells_day_then_hour_order() {
        let mut table = Timetable::new();
        table.commit(TimeSlot::new(Day::Wednesday, 8, 9), "R1", occ("C3", "I3"));
        table.commit(TimeSlot::new(Day::Monday, 13, 14), "R1", occ("C2", "I2"));
        table.commit(TimeSlot::new(Day::Monday, 8, 9), "R1", occ("C1", "I1"));

        let keys: Vec<_> = table.cells().map(|(d, h, _, _)| (d, h)).collect();
        assert_eq!(
            keys,
            vec![
                (Day::Monday, 8),
                (Day::Monday, 13),
                (Day::Wednesday, 8),
            ]
        );
    }

    #[test]
    fn test_entries_resolve_names() {
        let courses = vec![Course::new("C1")
            .with_name("Calculus I")
            .with_section("A")
            .with_instructor("I1")
            .with_classroom("R1")];
        let instructors = vec![Instructor::new("I1").with_name("Dr. Smith")];
        let classrooms = vec![Classroom::new("R1").with_name("Hall 1").with_capacity(40)];

        let mut table = Timetable::new();
        table.commit(TimeSlot::new(Day::Monday, 8, 10), "R1", occ("C1", "I1"));

        let entries = table.entries(&courses, &instructors, &classrooms);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].day, Day::Monday);
        assert_eq!(entries[0].hour, 8);
        assert_eq!(entries[1].hour, 9);
        assert_eq!(entries[0].course_name, "Calculus I");
        assert_eq!(entries[0].instructor_name, "Dr. Smith");
        assert_eq!(entries[0].room_name, "Hall 1");
        assert!(!entries[0].is_online);
    }

    #[test]
    fn test_entry_serialized_shape() {
        let entry = ScheduleEntry {
            day: Day::Monday,
            hour: 9,
            course_id: "C1".into(),
            course_name: "Calculus I".into(),
            section: "A".into(),
            instructor_id: "I1".into(),
            instructor_name: "Dr. Smith".into(),
            room_id: "R1".into(),
            room_name: "Hall 1".into(),
            is_online: false,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["day"], "Monday");
        assert_eq!(value["hour"], 9);
        assert_eq!(value["course_id"], "C1");
        assert_eq!(value["instructor_name"], "Dr. Smith");
        assert_eq!(value["room_id"], "R1");
        assert_eq!(value["is_online"], false);
    }
}
