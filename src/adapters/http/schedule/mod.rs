//! HTTP adapter for the reading schedule.
//!
//! - `GET /api/catalog` - section groups, optionally `?testament=OT|NT`
//! - `GET /api/catalog/:code` - one section group
//! - `GET /api/plan` - the full 288-day plan
//! - `GET /api/plan/weeks` - the plan grouped by week
//! - `GET /api/plan/days/:day` - one day with its date
//! - `GET /api/calendar/dates/:date` - status of a date
//! - `GET /api/calendar/days/:day` - date of a schedule day
//! - `GET /api/calendar/weeks/:week` - the seven dates of a week
//! - `GET /api/today` - today's reading

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::schedule_routes;
