//! HTTP adapters - REST API implementations.
//!
//! Each area has its own adapter module with dto, handlers and routes:
//! - `schedule` - catalog, plan, calendar and today's reading (public)
//! - `progress` - personal and group progress (requires `x-user-id`)
//! - `preferences` - the caller's version, start date and font size
//! - `scripture` - chapter text lookup

pub mod auth;
pub mod error;
pub mod extract;
pub mod preferences;
pub mod progress;
pub mod router;
pub mod schedule;
pub mod scripture;
pub mod state;

pub use auth::AuthenticatedUser;
pub use error::{ApiError, ErrorResponse};
pub use extract::{ApiJson, ApiPath, ApiQuery};
pub use router::{api_routes, app_router};
pub use state::AppState;
