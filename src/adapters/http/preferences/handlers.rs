//! HTTP handlers for preference endpoints.

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::UpdatePreferencesCommand;
use crate::domain::progress::PreferencesUpdate;

use super::super::auth::AuthenticatedUser;
use super::super::error::ApiError;
use super::super::extract::ApiJson;
use super::super::state::AppState;

/// GET /api/preferences
pub async fn get_preferences(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let prefs = state.preferences_handler().handle(&user.user_id).await?;
    Ok(Json(prefs))
}

/// PUT /api/preferences
pub async fn update_preferences(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiJson(update): ApiJson<PreferencesUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = UpdatePreferencesCommand {
        user_id: user.user_id,
        update,
    };
    let prefs = state.update_preferences_handler().handle(cmd).await?;
    Ok(Json(prefs))
}
