//! Request and response bodies for schedule endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::calendar::DayStatus;
use crate::domain::catalog::{SectionGroup, Testament};
use crate::domain::plan::{DayPlan, Schedule, WeekGroup};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQuery {
    pub testament: Option<Testament>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub chapter_count: u32,
    pub groups: Vec<&'static SectionGroup>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    pub total_days: u32,
    pub old_testament_days: u32,
    pub new_testament_days: u32,
    pub days: &'static Schedule,
}

#[derive(Debug, Serialize)]
pub struct WeeksResponse {
    pub weeks: Vec<WeekGroup<'static>>,
}

/// A date classified against the schedule.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateResponse {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub status: DayStatus,
    /// 0-based, 0 before the schedule starts.
    pub week_index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<&'static DayPlan>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDayResponse {
    pub day_number: u32,
    pub date: NaiveDate,
    pub week_index: u32,
}

#[derive(Debug, Serialize)]
pub struct WeekDate {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub status: DayStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekResponse {
    pub week_index: u32,
    pub dates: Vec<WeekDate>,
}
