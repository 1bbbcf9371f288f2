//! HTTP adapter for reading progress.
//!
//! All endpoints identify the caller through `x-user-id`:
//! - `GET /api/progress` - overall and weekly completion
//! - `PUT /api/progress/days/:day` - mark a day read or unread
//! - `DELETE /api/progress/days/:day` - clear a day and its chapters
//! - `PUT /api/progress/chapters/:code/:chapter` - mark a chapter read or unread;
//!   the last open chapter of a day completes the day
//! - `GET /api/progress/days/:day/checklist` - chapters of a day with their state
//! - `DELETE /api/progress` - clear all of the caller's progress
//! - `GET /api/group/progress` - how the whole group is doing

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::{group_routes, progress_routes};
