//! Progress module - per-reader completion, preferences and group aggregation.
//!
//! Records are kept at two granularities: whole schedule days and single
//! chapters. Completing the last open chapter of a day also completes the
//! day; clearing a chapter leaves the day flag alone.

mod checklist;
mod community;
mod preferences;
mod records;
mod summary;

pub use checklist::{ChapterCheck, DayChecklist};
pub use community::{
    aggregate_group_progress, CompletedDay, GroupProgress, Member, MemberProgress,
    UNNAMED_MEMBER,
};
pub use preferences::{
    PreferencesUpdate, UserPreferences, DEFAULT_FONT_SIZE, MAX_FONT_SIZE, MIN_FONT_SIZE,
};
pub use records::{ChapterProgress, ReadingProgress};
pub use summary::{ProgressSummary, WeekCompletion};
