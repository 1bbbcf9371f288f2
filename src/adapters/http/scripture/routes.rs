//! Axum routes for scripture endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{get_chapter_text, get_preferred_chapter_text};

/// Mounted at `/api/scripture`.
pub fn scripture_routes() -> Router<AppState> {
    Router::new()
        .route("/:code/:chapter", get(get_preferred_chapter_text))
        .route("/:version/:code/:chapter", get(get_chapter_text))
}
