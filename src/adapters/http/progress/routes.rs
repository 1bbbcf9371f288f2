//! Axum routes for progress endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::super::state::AppState;
use super::handlers::{
    get_day_checklist, get_group_progress, get_progress, reset_progress, restart_day,
    set_chapter_completion, set_day_completion,
};

/// Mounted at `/api/progress`.
pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_progress).delete(reset_progress))
        .route("/days/:day", put(set_day_completion).delete(restart_day))
        .route("/days/:day/checklist", get(get_day_checklist))
        .route("/chapters/:code/:chapter", put(set_chapter_completion))
}

/// Mounted at `/api/group`.
pub fn group_routes() -> Router<AppState> {
    Router::new().route("/progress", get(get_group_progress))
}
