//! GetDayPlanHandler - one schedule day with its calendar date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::calendar::ScheduleCalendar;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::plan::{day_plan, DayPlan};

/// Query for a single schedule day.
#[derive(Debug, Clone, Copy)]
pub struct GetDayPlanQuery {
    pub day_number: u32,
}

/// A day plan placed on the calendar.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlanView {
    #[serde(flatten)]
    pub plan: &'static DayPlan,
    pub date: NaiveDate,
    /// 1-based.
    pub week_number: u32,
}

pub struct GetDayPlanHandler {
    calendar: ScheduleCalendar,
}

impl GetDayPlanHandler {
    pub fn new(calendar: ScheduleCalendar) -> Self {
        Self { calendar }
    }

    pub fn handle(&self, query: GetDayPlanQuery) -> Result<DayPlanView, DomainError> {
        let not_found = || {
            DomainError::new(
                ErrorCode::DayNotFound,
                format!("Day {} is not part of the reading plan", query.day_number),
            )
        };

        let plan = day_plan(query.day_number).ok_or_else(not_found)?;
        let date = self
            .calendar
            .day_number_to_date(query.day_number)
            .map_err(|_| not_found())?;
        let week = self
            .calendar
            .week_of_day(query.day_number)
            .map_err(|_| not_found())?;

        Ok(DayPlanView {
            plan,
            date,
            week_number: week + 1,
        })
    }
}

impl Default for GetDayPlanHandler {
    fn default() -> Self {
        Self::new(ScheduleCalendar::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_seven_is_monday_of_week_two() {
        let view = GetDayPlanHandler::default()
            .handle(GetDayPlanQuery { day_number: 7 })
            .unwrap();

        assert_eq!(view.plan.label, "창 27-30");
        assert_eq!(view.date, NaiveDate::from_ymd_opt(2026, 2, 9).unwrap());
        assert_eq!(view.week_number, 2);
    }

    #[test]
    fn unknown_day_is_not_found() {
        for day in [0, 289] {
            let err = GetDayPlanHandler::default()
                .handle(GetDayPlanQuery { day_number: day })
                .unwrap_err();
            assert_eq!(err.code, ErrorCode::DayNotFound);
        }
    }

    #[test]
    fn view_flattens_plan_fields() {
        let view = GetDayPlanHandler::default()
            .handle(GetDayPlanQuery { day_number: 1 })
            .unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["dayNumber"], 1);
        assert_eq!(json["label"], "창 1-4");
        assert_eq!(json["date"], "2026-02-02");
        assert_eq!(json["weekNumber"], 1);
    }
}
