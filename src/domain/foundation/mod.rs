//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types used by the
//! catalog, plan, calendar and progress modules.

mod errors;
mod ids;
mod percentage;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::UserId;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
