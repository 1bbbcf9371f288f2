//! HTTP handlers for scripture endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::GetChapterTextQuery;
use crate::ports::ScriptureVersion;

use super::super::auth::AuthenticatedUser;
use super::super::error::ApiError;
use super::super::extract::ApiPath;
use super::super::state::AppState;

/// GET /api/scripture/:version/:code/:chapter
pub async fn get_chapter_text(
    State(state): State<AppState>,
    ApiPath((version, group_code, chapter)): ApiPath<(String, String, u32)>,
) -> Result<impl IntoResponse, ApiError> {
    let query = GetChapterTextQuery {
        version: version.parse::<ScriptureVersion>()?,
        group_code,
        chapter,
    };
    let text = state.chapter_text_handler().handle(query).await?;
    Ok(Json(text))
}

/// GET /api/scripture/:code/:chapter - in the caller's preferred version
pub async fn get_preferred_chapter_text(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiPath((group_code, chapter)): ApiPath<(String, u32)>,
) -> Result<impl IntoResponse, ApiError> {
    let prefs = state.preferences_handler().handle(&user.user_id).await?;
    let query = GetChapterTextQuery {
        version: prefs.bible_version,
        group_code,
        chapter,
    };
    let text = state.chapter_text_handler().handle(query).await?;
    Ok(Json(text))
}
