//! Weekly time grid: days, hour slots, and grid bounds.
//!
//! All times are whole hours on a fixed seven-day week. A slot is a
//! half-open interval `[start_hour, end_hour)` on one day; hour 8 means
//! 08:00–09:00.
//!
//! # Grid
//! The schedulable grid spans 08:00–22:00. Instructors without a matching
//! preferred interval are further restricted to weekdays 08:00–17:00.

use serde::{Deserialize, Serialize};

/// First schedulable hour of the weekly grid.
pub const GRID_START_HOUR: u8 = 8;
/// One past the last schedulable hour of the weekly grid.
pub const GRID_END_HOUR: u8 = 22;
/// Default working-window start for sessions outside preferred intervals.
pub const WORKDAY_START_HOUR: u8 = 8;
/// Default working-window end (exclusive).
pub const WORKDAY_END_HOUR: u8 = 17;
/// Upper bound of the allocator's start-hour scan: a session of length `n`
/// may start at hours `8..(18 - n)`.
pub const SEARCH_END_HOUR: u8 = 18;
/// Most consecutive hours a course may accumulate on one day.
pub const MAX_CONSECUTIVE_HOURS: u8 = 4;
/// Session length the allocator tries first, before shrinking.
pub const DEFAULT_SESSION_HOURS: u8 = 3;

/// Day of the week.
///
/// Ordered Monday-first; the derived `Ord` gives day-then-hour iteration
/// when used in a sorted map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All seven days in week order.
    pub const WEEK: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    /// Zero-based position in the week (Monday = 0).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Whether this day is Saturday or Sunday.
    #[inline]
    pub fn is_weekend(self) -> bool {
        matches!(self, Day::Saturday | Day::Sunday)
    }
}

/// A time interval `[start_hour, end_hour)` on one day.
///
/// Half-open: includes the start hour, excludes the end hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Day the interval falls on.
    pub day: Day,
    /// First hour (inclusive).
    pub start_hour: u8,
    /// End hour (exclusive).
    pub end_hour: u8,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(day: Day, start_hour: u8, end_hour: u8) -> Self {
        Self {
            day,
            start_hour,
            end_hour,
        }
    }

    /// Number of hours covered.
    #[inline]
    pub fn duration(&self) -> u8 {
        self.end_hour - self.start_hour
    }

    /// The hours covered, in order.
    pub fn hours(&self) -> std::ops::Range<u8> {
        self.start_hour..self.end_hour
    }

    /// Whether two slots overlap.
    ///
    /// Slots on different days never overlap. On the same day, one ending
    /// at or before the other starts is disjoint (touching is not overlap).
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_hour < other.end_hour
            && other.start_hour < self.end_hour
    }

    /// Whether this slot fully contains `[start_hour, end_hour)` on `day`.
    pub fn contains_span(&self, day: Day, start_hour: u8, end_hour: u8) -> bool {
        self.day == day && self.start_hour <= start_hour && end_hour <= self.end_hour
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_index() {
        assert_eq!(Day::Monday.index(), 0);
        assert_eq!(Day::Friday.index(), 4);
        assert_eq!(Day::Sunday.index(), 6);
    }

    #[test]
    fn test_day_weekend() {
        assert!(!Day::Monday.is_weekend());
        assert!(!Day::Friday.is_weekend());
        assert!(Day::Saturday.is_weekend());
        assert!(Day::Sunday.is_weekend());
    }

    #[test]
    fn test_week_order() {
        assert_eq!(Day::WEEK.len(), 7);
        assert_eq!(Day::WEEK[0], Day::Monday);
        assert_eq!(Day::WEEK[6], Day::Sunday);
        // Ord follows week order
        assert!(Day::Monday < Day::Tuesday);
        assert!(Day::Friday < Day::Saturday);
    }

    #[test]
    fn test_slot_duration() {
        let s = TimeSlot::new(Day::Monday, 8, 11);
        assert_eq!(s.duration(), 3);
        assert_eq!(s.hours().collect::<Vec<_>>(), vec![8, 9, 10]);
    }

    #[test]
    fn test_slot_overlap() {
        let a = TimeSlot::new(Day::Monday, 8, 11);
        let b = TimeSlot::new(Day::Monday, 10, 13);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeSlot::new(Day::Monday, 11, 13); // touching but not overlapping
        assert!(!a.overlaps(&c));

        let d = TimeSlot::new(Day::Tuesday, 8, 11); // other day
        assert!(!a.overlaps(&d));
    }

    #[test]
    fn test_slot_contains_span() {
        let s = TimeSlot::new(Day::Monday, 8, 12);
        assert!(s.contains_span(Day::Monday, 8, 12));
        assert!(s.contains_span(Day::Monday, 9, 11));
        assert!(!s.contains_span(Day::Monday, 7, 11));
        assert!(!s.contains_span(Day::Monday, 10, 13));
        assert!(!s.contains_span(Day::Tuesday, 9, 11));
    }
}
