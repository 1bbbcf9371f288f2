//! HTTP adapter for chapter text.
//!
//! - `GET /api/scripture/:version/:code/:chapter` - verses of one chapter
//! - `GET /api/scripture/:code/:chapter` - the same, in the caller's
//!   preferred version (requires `x-user-id`)

pub mod handlers;
pub mod routes;

pub use routes::scripture_routes;
