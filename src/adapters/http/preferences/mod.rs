//! HTTP adapter for reader preferences.
//!
//! - `GET /api/preferences` - the caller's preferences, defaults if never saved
//! - `PUT /api/preferences` - partial update; omitted fields are kept

pub mod handlers;
pub mod routes;

pub use routes::preferences_routes;
