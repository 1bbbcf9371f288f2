//! HTTP handlers for schedule endpoints.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDate;

use crate::application::handlers::GetDayPlanQuery;
use crate::domain::catalog::{catalog, chapter_total, section_group_by_code, section_groups_by_testament};
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::plan::{day_plan, group_by_week, schedule, PlanConfig};

use super::super::error::ApiError;
use super::super::extract::{ApiPath, ApiQuery};
use super::super::state::AppState;
use super::dto::{
    CalendarDayResponse, CatalogQuery, CatalogResponse, DateResponse, PlanResponse, WeekDate,
    WeekResponse, WeeksResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Catalog
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/catalog
pub async fn list_catalog(ApiQuery(query): ApiQuery<CatalogQuery>) -> impl IntoResponse {
    let groups = match query.testament {
        Some(testament) => section_groups_by_testament(testament),
        None => catalog().iter().collect(),
    };
    Json(CatalogResponse {
        chapter_count: chapter_total(groups.iter().copied()),
        groups,
    })
}

/// GET /api/catalog/:code
pub async fn get_section_group(
    ApiPath(code): ApiPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    let group = section_group_by_code(&code).ok_or_else(|| {
        DomainError::new(
            ErrorCode::SectionGroupNotFound,
            format!("Unknown section group '{}'", code),
        )
    })?;
    Ok(Json(group))
}

// ════════════════════════════════════════════════════════════════════════════════
// Plan
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/plan
pub async fn get_plan() -> impl IntoResponse {
    let config = PlanConfig::STANDARD;
    Json(PlanResponse {
        total_days: config.total_days,
        old_testament_days: config.old_testament_days,
        new_testament_days: config.new_testament_days,
        days: schedule(),
    })
}

/// GET /api/plan/weeks
pub async fn get_plan_weeks(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let weeks = group_by_week(schedule(), &state.calendar)?;
    Ok(Json(WeeksResponse { weeks }))
}

/// GET /api/plan/days/:day
pub async fn get_plan_day(
    State(state): State<AppState>,
    ApiPath(day_number): ApiPath<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let view = state.day_plan_handler().handle(GetDayPlanQuery { day_number })?;
    Ok(Json(view))
}

// ════════════════════════════════════════════════════════════════════════════════
// Calendar
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/calendar/dates/:date - `date` is `YYYY-MM-DD`
pub async fn get_calendar_date(
    State(state): State<AppState>,
    ApiPath(raw): ApiPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
        .map_err(|_| ValidationError::invalid_format("date", "expected YYYY-MM-DD"))?;
    let status = state.calendar.day_status(date);

    Ok(Json(DateResponse {
        date,
        status,
        week_index: state.calendar.week_index(date),
        plan: status.day_number().and_then(day_plan),
    }))
}

/// GET /api/calendar/days/:day
pub async fn get_calendar_day(
    State(state): State<AppState>,
    ApiPath(day_number): ApiPath<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let date = state.calendar.day_number_to_date(day_number)?;
    Ok(Json(CalendarDayResponse {
        day_number,
        date,
        week_index: state.calendar.week_of_day(day_number)?,
    }))
}

/// GET /api/calendar/weeks/:week - `week` is 0-based
pub async fn get_calendar_week(
    State(state): State<AppState>,
    ApiPath(week_index): ApiPath<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let dates = state
        .calendar
        .dates_in_week(week_index)?
        .into_iter()
        .map(|date| WeekDate {
            date,
            status: state.calendar.day_status(date),
        })
        .collect();
    Ok(Json(WeekResponse { week_index, dates }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Today
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/today
pub async fn get_today(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.today_handler().handle())
}
