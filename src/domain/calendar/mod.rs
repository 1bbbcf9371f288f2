//! Calendar mapper - converts between calendar dates and schedule days.
//!
//! The schedule runs on a 7-day cycle anchored at the epoch: six reading
//! days followed by one rest day. Day 1 is the epoch itself.
//!
//! ```text
//! offset from epoch:  0  1  2  3  4  5  6 | 7  8 ...
//! schedule day:       1  2  3  4  5  6  - | 7  8 ...
//! ```
//!
//! The free functions below use the standard calendar (epoch 2026-02-02,
//! 288 reading days).

mod errors;
mod schedule_calendar;
mod status;

pub use errors::CalendarError;
pub use schedule_calendar::{
    ScheduleCalendar, CYCLE_LENGTH, EPOCH_DAY, EPOCH_MONTH, EPOCH_YEAR, READING_DAYS_PER_CYCLE,
    REST_DAY_OFFSET,
};
pub use status::DayStatus;

use chrono::NaiveDate;

/// Schedule day for `date`, or `None` before the epoch, on rest days and
/// after the last day.
pub fn date_to_day_number(date: NaiveDate) -> Option<u32> {
    ScheduleCalendar::standard().date_to_day_number(date)
}

/// Calendar date of a 1-based schedule day.
pub fn day_number_to_date(day_number: u32) -> Result<NaiveDate, CalendarError> {
    ScheduleCalendar::standard().day_number_to_date(day_number)
}

/// Whether `date` is the rest day of its cycle.
pub fn is_rest_day(date: NaiveDate) -> bool {
    ScheduleCalendar::standard().is_rest_day(date)
}

/// 0-based cycle index of `date`, clamped to 0 before the epoch.
pub fn week_index(date: NaiveDate) -> u32 {
    ScheduleCalendar::standard().week_index(date)
}

/// The seven consecutive dates of a cycle.
pub fn dates_in_week(week_index: u32) -> Result<[NaiveDate; 7], CalendarError> {
    ScheduleCalendar::standard().dates_in_week(week_index)
}

/// Full classification of `date`.
pub fn day_status(date: NaiveDate) -> DayStatus {
    ScheduleCalendar::standard().day_status(date)
}
