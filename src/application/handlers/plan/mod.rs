//! Plan and calendar query handlers.

mod get_day_plan;
mod get_today_reading;

pub use get_day_plan::{DayPlanView, GetDayPlanHandler, GetDayPlanQuery};
pub use get_today_reading::{GetTodayReadingHandler, TodayReading};
