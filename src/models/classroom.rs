//! Classroom model.

use serde::{Deserialize, Serialize};

/// A room where course sessions take place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classroom {
    /// Unique classroom identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Seating capacity.
    pub capacity: u32,
    /// Room type tag, e.g. [`Classroom::LECTURE`] or [`Classroom::COMPUTER_LAB`].
    pub room_type: String,
}

impl Classroom {
    /// Room type tag for standard lecture rooms.
    pub const LECTURE: &'static str = "lecture";
    /// Room type tag for computer labs.
    pub const COMPUTER_LAB: &'static str = "computer_lab";

    /// Creates a new lecture room with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            room_type: Self::LECTURE.to_string(),
        }
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the room type tag.
    pub fn with_room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    /// Whether this room is tagged as a computer lab.
    #[inline]
    pub fn is_computer_lab(&self) -> bool {
        self.room_type == Self::COMPUTER_LAB
    }
}
