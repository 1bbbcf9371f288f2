//! Axum routes for preference endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{get_preferences, update_preferences};

/// Mounted at `/api/preferences`.
pub fn preferences_routes() -> Router<AppState> {
    Router::new().route("/", get(get_preferences).put(update_preferences))
}
