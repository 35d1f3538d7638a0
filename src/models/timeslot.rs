//! Timeslot assignment model.

use serde::{Deserialize, Serialize};

use super::ClassSession;

/// The subject and teacher occupying one timeslot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeslotAssignment {
    /// Subject taught in this slot.
    pub subject: String,
    /// Teacher in this slot.
    pub teacher: String,
}

impl TimeslotAssignment {
    /// Creates a timeslot assignment.
    pub fn new(subject: impl Into<String>, teacher: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            teacher: teacher.into(),
        }
    }
}

impl From<&ClassSession> for TimeslotAssignment {
    fn from(session: &ClassSession) -> Self {
        Self::new(session.subject.clone(), session.teacher.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_fields() {
        let slot = TimeslotAssignment::new("Physics", "Ms. Lee");
        assert_eq!(slot.subject, "Physics");
        assert_eq!(slot.teacher, "Ms. Lee");
    }

    #[test]
    fn test_slot_from_session() {
        let s = ClassSession::new("10A1", "Math", "Mr. Smith", 3, 45, 1, true);
        let slot = TimeslotAssignment::from(&s);

        assert_eq!(slot, TimeslotAssignment::new("Math", "Mr. Smith"));
    }
}
