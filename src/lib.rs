//! School timetable data model.
//!
//! Provides the record types for class timetables and an opt-in
//! validation pass over them. There is no scheduling engine here;
//! this crate is the shared vocabulary that one would be built on.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ClassSession`, `TimeslotAssignment`,
//!   `WeeklyClassTable`
//! - **`validation`**: Input integrity checks (empty fields, non-positive
//!   counts, duplicate records)
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{TimeslotAssignment, WeeklyClassTable};
//!
//! let table = WeeklyClassTable::new(
//!     "10A1",
//!     vec![
//!         TimeslotAssignment::new("Math", "Mr. Smith"),
//!         TimeslotAssignment::new("Physics", "Ms. Lee"),
//!     ],
//! );
//! assert_eq!(table.slot_count(), 2);
//! ```

pub mod models;
pub mod validation;
