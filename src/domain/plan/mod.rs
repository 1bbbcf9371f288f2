//! Reading plan - partitions the corpus into a fixed number of days.
//!
//! # Pipeline
//!
//! ```text
//! catalog ─► flatten_units ─► distribute_counts ─► compress_ranges ─► DayPlan
//! ```
//!
//! Each testament runs through the pipeline independently with its own day
//! budget; the old testament takes days `1..=216` and the new testament days
//! `217..=288`. Everything here is pure and deterministic, so the standard
//! schedule is generated once and shared for the life of the process.

mod day_plan;
mod distribution;
mod errors;
mod flatten;
mod generator;
mod ranges;
mod weeks;

pub use day_plan::{render_label, DayPlan};
pub use distribution::distribute_counts;
pub use errors::PlanError;
pub use flatten::{flatten_units, FlatUnit};
pub use generator::{
    day_plan, generate_schedule, generate_schedule_from, schedule, PlanConfig, Schedule,
    NEW_TESTAMENT_DAYS, OLD_TESTAMENT_DAYS, TOTAL_READING_DAYS,
};
pub use ranges::{compress_ranges, ReadingRange};
pub use weeks::{group_by_week, WeekGroup};
