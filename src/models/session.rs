//! Class session model.
//!
//! A class session is one teaching assignment: a class group taking a
//! subject from a teacher, with the metadata a timetable builder needs
//! (how many sessions, how long each one is, priority, pinned or not).

use serde::{Deserialize, Serialize};

/// A single teaching assignment for a class group.
///
/// All fields are supplied at construction; nothing is checked here.
/// Use [`crate::validation::validate_sessions`] for integrity checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassSession {
    /// Class group identifier (e.g., "10A1").
    pub class_id: String,
    /// Subject taught.
    pub subject: String,
    /// Teacher identifier.
    pub teacher: String,
    /// Number of sessions required.
    pub session_count: i32,
    /// Length of each session.
    pub duration: i32,
    /// Scheduling priority weight. Ordering direction is up to the consumer.
    pub priority: i32,
    /// Fixed assignment that must not be moved.
    pub is_pinned: bool,
}

impl ClassSession {
    /// Creates a class session from all of its fields.
    pub fn new(
        class_id: impl Into<String>,
        subject: impl Into<String>,
        teacher: impl Into<String>,
        session_count: i32,
        duration: i32,
        priority: i32,
        is_pinned: bool,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            subject: subject.into(),
            teacher: teacher.into(),
            session_count,
            duration,
            priority,
            is_pinned,
        }
    }

    /// Total teaching time (`session_count * duration`).
    #[inline]
    pub fn total_length(&self) -> i64 {
        i64::from(self.session_count) * i64::from(self.duration)
    }
}
