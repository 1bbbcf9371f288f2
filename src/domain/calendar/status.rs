//! DayStatus - classification of a calendar date against the schedule.

use serde::Serialize;

/// Exactly one of these holds for any date.
///
/// Rest days are classified as rest days even after the schedule ends;
/// `AfterEnd` only covers would-be reading days past the last day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "dayNumber", rename_all = "snake_case")]
pub enum DayStatus {
    BeforeStart,
    RestDay,
    Reading(u32),
    AfterEnd,
}

impl DayStatus {
    /// The schedule day, if this is a reading day.
    pub fn day_number(&self) -> Option<u32> {
        match self {
            DayStatus::Reading(day) => Some(*day),
            _ => None,
        }
    }

    pub fn is_rest_day(&self) -> bool {
        matches!(self, DayStatus::RestDay)
    }
}
