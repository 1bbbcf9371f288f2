//! Week grouping for the plan overview.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::calendar::{CalendarError, ScheduleCalendar};

use super::{DayPlan, Schedule};

/// One cadence cycle of the schedule with its reading days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGroup<'a> {
    /// 1-based for display.
    pub week_number: u32,
    /// Date of the week's first reading day.
    pub start_date: NaiveDate,
    pub days: Vec<&'a DayPlan>,
}

/// Groups the schedule into cycles of six reading days.
///
/// # Errors
///
/// Fails if the schedule holds days the calendar doesn't cover.
pub fn group_by_week<'a>(
    schedule: &'a Schedule,
    calendar: &ScheduleCalendar,
) -> Result<Vec<WeekGroup<'a>>, CalendarError> {
    let mut weeks: Vec<WeekGroup<'a>> = Vec::new();

    for day in schedule {
        let week = calendar.week_of_day(day.day_number)?;
        match weeks.last_mut() {
            Some(current) if current.week_number == week + 1 => current.days.push(day),
            _ => weeks.push(WeekGroup {
                week_number: week + 1,
                start_date: calendar.day_number_to_date(day.day_number)?,
                days: vec![day],
            }),
        }
    }

    Ok(weeks)
}
