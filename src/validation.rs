//! Input validation for timetable records.
//!
//! Constructors accept any values. These checks are an opt-in pass over
//! a batch of records and detect:
//! - Empty identifiers (class, subject, teacher)
//! - Non-positive session counts and durations
//! - Duplicate records (same session listed twice, two tables for one class)
//!
//! No cross-slot clash detection is done here.

use crate::models::{ClassSession, WeeklyClassTable};
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required string field is empty.
    EmptyField,
    /// A count or duration is zero or negative.
    NonPositiveValue,
    /// The same record (or the same class table) appears twice.
    DuplicateId,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    fn empty(what: &str, owner: &str) -> Self {
        Self::new(
            ValidationErrorKind::EmptyField,
            format!("{owner} has an empty {what}"),
        )
    }
}

/// Validates a batch of class sessions.
///
/// Checks:
/// 1. `class_id`, `subject` and `teacher` are non-empty
/// 2. `session_count` and `duration` are positive
/// 3. No (class, subject, teacher) triple is listed twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sessions(sessions: &[ClassSession]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (i, s) in sessions.iter().enumerate() {
        let owner = format!("Session #{i} ('{}'/'{}')", s.class_id, s.subject);

        if s.class_id.is_empty() {
            errors.push(ValidationError::empty("class_id", &owner));
        }
        if s.subject.is_empty() {
            errors.push(ValidationError::empty("subject", &owner));
        }
        if s.teacher.is_empty() {
            errors.push(ValidationError::empty("teacher", &owner));
        }

        if s.session_count <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("{owner} has session_count {}", s.session_count),
            ));
        }
        if s.duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveValue,
                format!("{owner} has duration {}", s.duration),
            ));
        }

        let key = (s.class_id.as_str(), s.subject.as_str(), s.teacher.as_str());
        if !seen.insert(key) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!(
                    "Duplicate session: class '{}', subject '{}', teacher '{}'",
                    s.class_id, s.subject, s.teacher
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a batch of weekly class tables.
///
/// Checks:
/// 1. Every table has a non-empty `class_id`
/// 2. No class has more than one table
/// 3. Every slot has a non-empty subject and teacher
///
/// Empty tables (no slots) are accepted.
pub fn validate_tables(tables: &[WeeklyClassTable]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut class_ids = HashSet::new();

    for table in tables {
        if table.class_id.is_empty() {
            errors.push(ValidationError::empty("class_id", "Table"));
        } else if !class_ids.insert(table.class_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate table for class: {}", table.class_id),
            ));
        }

        for (index, slot) in table.timeslots.iter().enumerate() {
            let owner = format!("Slot {index} of class '{}'", table.class_id);
            if slot.subject.is_empty() {
                errors.push(ValidationError::empty("subject", &owner));
            }
            if slot.teacher.is_empty() {
                errors.push(ValidationError::empty("teacher", &owner));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
