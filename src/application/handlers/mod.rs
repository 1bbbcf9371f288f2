//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod community;
pub mod plan;
pub mod preferences;
pub mod progress;
pub mod scripture;

pub use community::GetGroupProgressHandler;
pub use plan::{
    DayPlanView, GetDayPlanHandler, GetDayPlanQuery, GetTodayReadingHandler, TodayReading,
};
pub use preferences::{GetPreferencesHandler, UpdatePreferencesCommand, UpdatePreferencesHandler};
pub use progress::{
    ChapterCompletion, GetDayChecklistHandler, GetDayChecklistQuery, GetProgressSummaryHandler,
    ResetProgressHandler, RestartDayCommand, RestartDayHandler, SetChapterCompletionCommand,
    SetChapterCompletionHandler, SetDayCompletionCommand, SetDayCompletionHandler,
};
pub use scripture::{GetChapterTextHandler, GetChapterTextQuery};
