//! GetTodayReadingHandler - what the reader should read today.

use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::domain::calendar::{DayStatus, ScheduleCalendar};
use crate::domain::plan::{day_plan, DayPlan};
use crate::ports::Clock;

/// Today's place in the schedule.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayReading {
    pub date: NaiveDate,
    /// Serialized inline as `status` plus `dayNumber` on reading days.
    #[serde(flatten)]
    pub status: DayStatus,
    #[serde(skip)]
    pub day_number: Option<u32>,
    /// 0-based cycle of today, 0 before the schedule starts.
    pub week_index: u32,
    pub plan: Option<&'static DayPlan>,
}

impl TodayReading {
    pub fn is_before_start(&self) -> bool {
        self.status == DayStatus::BeforeStart
    }

    pub fn is_after_end(&self) -> bool {
        self.status == DayStatus::AfterEnd
    }
}

pub struct GetTodayReadingHandler {
    clock: Arc<dyn Clock>,
    calendar: ScheduleCalendar,
}

impl GetTodayReadingHandler {
    pub fn new(clock: Arc<dyn Clock>, calendar: ScheduleCalendar) -> Self {
        Self { clock, calendar }
    }

    pub fn handle(&self) -> TodayReading {
        let date = self.clock.today();
        let status = self.calendar.day_status(date);
        let day_number = status.day_number();
        debug!(%date, ?status, "resolved today's reading");

        TodayReading {
            date,
            status,
            day_number,
            week_index: self.calendar.week_index(date),
            plan: day_number.and_then(day_plan),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedClock;

    fn handler_on(y: i32, m: u32, d: u32) -> GetTodayReadingHandler {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(y, m, d).unwrap());
        GetTodayReadingHandler::new(Arc::new(clock), ScheduleCalendar::standard())
    }

    #[test]
    fn first_day_returns_first_plan() {
        let today = handler_on(2026, 2, 2).handle();
        assert_eq!(today.status, DayStatus::Reading(1));
        assert_eq!(today.day_number, Some(1));
        assert_eq!(today.plan.map(|p| p.label.as_str()), Some("창 1-4"));
        assert_eq!(today.week_index, 0);
    }

    #[test]
    fn rest_day_has_no_plan() {
        let today = handler_on(2026, 2, 15).handle();
        assert_eq!(today.status, DayStatus::RestDay);
        assert!(today.plan.is_none());
        assert_eq!(today.week_index, 1);
    }

    #[test]
    fn before_and_after_schedule_are_distinguished() {
        let before = handler_on(2025, 12, 25).handle();
        assert!(before.is_before_start());
        assert!(!before.is_after_end());

        let after = handler_on(2027, 3, 1).handle();
        assert!(after.is_after_end());
        assert!(after.plan.is_none());
    }
}
