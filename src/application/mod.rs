//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Plan and calendar queries are answered from the memoized schedule;
//! progress commands validate against it before touching storage.

pub mod handlers;

pub use handlers::{
    // Plan and calendar queries
    GetDayPlanHandler, GetDayPlanQuery, DayPlanView,
    GetTodayReadingHandler, TodayReading,
    // Progress commands and queries
    SetDayCompletionHandler, SetDayCompletionCommand,
    SetChapterCompletionHandler, SetChapterCompletionCommand, ChapterCompletion,
    GetProgressSummaryHandler, GetDayChecklistHandler, GetDayChecklistQuery,
    RestartDayHandler, RestartDayCommand,
    ResetProgressHandler,
    // Preferences
    GetPreferencesHandler, UpdatePreferencesHandler, UpdatePreferencesCommand,
    // Group and scripture queries
    GetGroupProgressHandler,
    GetChapterTextHandler, GetChapterTextQuery,
};
