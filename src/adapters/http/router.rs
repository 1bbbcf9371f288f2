//! Top-level router and middleware stack.

use std::time::Duration;

use axum::Router;
use http::{header, HeaderName, HeaderValue, Method};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::config::ServerConfig;

use super::auth::USER_ID_HEADER;
use super::preferences::preferences_routes;
use super::progress::{group_routes, progress_routes};
use super::schedule::schedule_routes;
use super::scripture::scripture_routes;
use super::state::AppState;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// All API routes, unmounted and without middleware.
///
/// # Routes
/// - `/catalog`, `/plan`, `/calendar`, `/today` - schedule queries
/// - `/progress` - the caller's progress
/// - `/group` - group progress
/// - `/preferences` - the caller's reading preferences
/// - `/scripture` - chapter text
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(schedule_routes())
        .nest("/progress", progress_routes())
        .nest("/group", group_routes())
        .nest("/preferences", preferences_routes())
        .nest("/scripture", scripture_routes())
}

/// The complete application: API under `/api` behind request ids, tracing,
/// compression, CORS and a per-request timeout.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .nest("/api", api_routes())
        .with_state(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(CompressionLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(USER_ID_HEADER)]);

    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return base.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    base.allow_origin(AllowOrigin::list(allowed))
}
