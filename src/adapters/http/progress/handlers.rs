//! HTTP handlers for progress endpoints.

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    GetDayChecklistQuery, RestartDayCommand, SetChapterCompletionCommand,
    SetDayCompletionCommand,
};

use super::super::auth::AuthenticatedUser;
use super::super::error::ApiError;
use super::super::extract::{ApiJson, ApiPath};
use super::super::state::AppState;
use super::dto::SetCompletionRequest;

/// GET /api/progress
pub async fn get_progress(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let summary = state.progress_summary_handler().handle(&user.user_id).await?;
    Ok(Json(summary))
}

/// PUT /api/progress/days/:day
pub async fn set_day_completion(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(day_number): ApiPath<u32>,
    ApiJson(request): ApiJson<SetCompletionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SetDayCompletionCommand {
        user_id: user.user_id,
        day_number,
        completed: request.completed,
    };
    let record = state.set_day_completion_handler().handle(cmd).await?;
    Ok(Json(record))
}

/// PUT /api/progress/chapters/:code/:chapter
pub async fn set_chapter_completion(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath((group_code, chapter)): ApiPath<(String, u32)>,
    ApiJson(request): ApiJson<SetCompletionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SetChapterCompletionCommand {
        user_id: user.user_id,
        group_code,
        chapter,
        completed: request.completed,
    };
    let record = state.set_chapter_completion_handler().handle(cmd).await?;
    Ok(Json(record))
}

/// DELETE /api/progress/days/:day
pub async fn restart_day(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(day_number): ApiPath<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = RestartDayCommand {
        user_id: user.user_id,
        day_number,
    };
    let checklist = state.restart_day_handler().handle(cmd).await?;
    Ok(Json(checklist))
}

/// GET /api/progress/days/:day/checklist
pub async fn get_day_checklist(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath(day_number): ApiPath<u32>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetDayChecklistQuery {
        user_id: user.user_id,
        day_number,
    };
    let checklist = state.day_checklist_handler().handle(query).await?;
    Ok(Json(checklist))
}

/// DELETE /api/progress
pub async fn reset_progress(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    state.reset_progress_handler().handle(&user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/group/progress
pub async fn get_group_progress(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let progress = state.group_progress_handler().handle().await?;
    Ok(Json(progress))
}
