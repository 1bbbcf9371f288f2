//! Domain layer containing the reading plan logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `catalog` - The 66 section groups of the corpus
//! - `plan` - Partitioning the corpus into the fixed daily schedule
//! - `calendar` - Date to schedule-day mapping under the 6-on/1-off cadence
//! - `progress` - Per-reader completion records and group aggregation

pub mod calendar;
pub mod catalog;
pub mod foundation;
pub mod plan;
pub mod progress;
