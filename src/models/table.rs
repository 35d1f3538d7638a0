//! Weekly class table model.
//!
//! A weekly table is the full timetable of one class group. Slots are
//! stored in order; the position of a slot in `timeslots` is its
//! timeslot index. How many slots a week has, and what each index
//! means (day × period), is left to the consumer.

use serde::{Deserialize, Serialize};

use super::TimeslotAssignment;

/// One class group's week of timeslot assignments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeeklyClassTable {
    /// Class group identifier.
    pub class_id: String,
    /// Assignments in timeslot order.
    pub timeslots: Vec<TimeslotAssignment>,
}

impl WeeklyClassTable {
    /// Creates a table from a class ID and its full slot sequence.
    pub fn new(class_id: impl Into<String>, timeslots: Vec<TimeslotAssignment>) -> Self {
        Self {
            class_id: class_id.into(),
            timeslots,
        }
    }

    /// Appends a slot at the end of the week.
    pub fn with_slot(mut self, slot: TimeslotAssignment) -> Self {
        self.timeslots.push(slot);
        self
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.timeslots.len()
    }

    /// Whether the table has no slots.
    pub fn is_empty(&self) -> bool {
        self.timeslots.is_empty()
    }

    /// Slot at the given timeslot index.
    pub fn slot(&self, index: usize) -> Option<&TimeslotAssignment> {
        self.timeslots.get(index)
    }
}
