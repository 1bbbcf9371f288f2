//! Reading-group queries.

mod get_group_progress;

pub use get_group_progress::GetGroupProgressHandler;
