//! Axum routes for schedule endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{
    get_calendar_date, get_calendar_day, get_calendar_week, get_plan, get_plan_day,
    get_plan_weeks, get_section_group, get_today, list_catalog,
};

pub fn schedule_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(list_catalog))
        .route("/catalog/:code", get(get_section_group))
        .route("/plan", get(get_plan))
        .route("/plan/weeks", get(get_plan_weeks))
        .route("/plan/days/:day", get(get_plan_day))
        .route("/calendar/dates/:date", get(get_calendar_date))
        .route("/calendar/days/:day", get(get_calendar_day))
        .route("/calendar/weeks/:week", get(get_calendar_week))
        .route("/today", get(get_today))
}
