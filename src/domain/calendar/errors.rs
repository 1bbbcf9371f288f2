//! Calendar errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Inverse mapping was asked for a day the schedule doesn't have.
    #[error("Day {day} is outside the schedule (1..={max})")]
    DayOutOfRange { day: u32, max: u32 },

    #[error("Schedule must contain at least one reading day")]
    EmptySchedule,

    #[error("Date arithmetic overflowed the supported calendar range")]
    DateOverflow,
}
