//! Timetable domain models.
//!
//! Plain value types describing what a school timetable holds. They carry
//! no scheduling behaviour; solvers and UIs build on top of them.
//!
//! | Type | Meaning |
//! |------|---------|
//! | ClassSession | Class × subject × teacher, with session count, length, priority |
//! | TimeslotAssignment | Subject and teacher in one slot |
//! | WeeklyClassTable | One class's week of slots, in order |

mod session;
mod table;
mod timeslot;

pub use session::ClassSession;
pub use table::WeeklyClassTable;
pub use timeslot::TimeslotAssignment;
