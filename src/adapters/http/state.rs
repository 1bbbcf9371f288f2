//! Shared application state.

use std::sync::Arc;

use crate::adapters::memory::{
    InMemoryMemberDirectory, InMemoryPreferencesStore, InMemoryProgressStore,
    InMemoryScriptureStore,
};
use crate::application::handlers::{
    GetChapterTextHandler, GetDayChecklistHandler, GetDayPlanHandler, GetGroupProgressHandler,
    GetPreferencesHandler, GetProgressSummaryHandler, GetTodayReadingHandler,
    ResetProgressHandler, RestartDayHandler, SetChapterCompletionHandler,
    SetDayCompletionHandler, UpdatePreferencesHandler,
};
use crate::domain::calendar::ScheduleCalendar;
use crate::ports::{
    Clock, MemberDirectory, PreferencesRepository, ProgressRepository, ScriptureReader,
};

/// Arc-wrapped dependencies, cloned into every request.
#[derive(Clone)]
pub struct AppState {
    pub progress_repository: Arc<dyn ProgressRepository>,
    pub preferences_repository: Arc<dyn PreferencesRepository>,
    pub member_directory: Arc<dyn MemberDirectory>,
    pub scripture_reader: Arc<dyn ScriptureReader>,
    pub clock: Arc<dyn Clock>,
    pub calendar: ScheduleCalendar,
}

impl AppState {
    /// State backed by empty in-memory stores and the standard calendar.
    pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
        Self {
            progress_repository: Arc::new(InMemoryProgressStore::new()),
            preferences_repository: Arc::new(InMemoryPreferencesStore::new()),
            member_directory: Arc::new(InMemoryMemberDirectory::new()),
            scripture_reader: Arc::new(InMemoryScriptureStore::new()),
            clock,
            calendar: ScheduleCalendar::standard(),
        }
    }

    pub fn day_plan_handler(&self) -> GetDayPlanHandler {
        GetDayPlanHandler::new(self.calendar)
    }

    pub fn today_handler(&self) -> GetTodayReadingHandler {
        GetTodayReadingHandler::new(self.clock.clone(), self.calendar)
    }

    pub fn set_day_completion_handler(&self) -> SetDayCompletionHandler {
        SetDayCompletionHandler::new(self.progress_repository.clone(), self.clock.clone())
    }

    pub fn set_chapter_completion_handler(&self) -> SetChapterCompletionHandler {
        SetChapterCompletionHandler::new(self.progress_repository.clone(), self.clock.clone())
    }

    pub fn progress_summary_handler(&self) -> GetProgressSummaryHandler {
        GetProgressSummaryHandler::new(self.progress_repository.clone())
    }

    pub fn day_checklist_handler(&self) -> GetDayChecklistHandler {
        GetDayChecklistHandler::new(self.progress_repository.clone())
    }

    pub fn restart_day_handler(&self) -> RestartDayHandler {
        RestartDayHandler::new(self.progress_repository.clone(), self.clock.clone())
    }

    pub fn reset_progress_handler(&self) -> ResetProgressHandler {
        ResetProgressHandler::new(self.progress_repository.clone())
    }

    pub fn preferences_handler(&self) -> GetPreferencesHandler {
        GetPreferencesHandler::new(self.preferences_repository.clone())
    }

    pub fn update_preferences_handler(&self) -> UpdatePreferencesHandler {
        UpdatePreferencesHandler::new(self.preferences_repository.clone(), self.clock.clone())
    }

    pub fn group_progress_handler(&self) -> GetGroupProgressHandler {
        GetGroupProgressHandler::new(
            self.member_directory.clone(),
            self.progress_repository.clone(),
            self.clock.clone(),
            self.calendar,
        )
    }

    pub fn chapter_text_handler(&self) -> GetChapterTextHandler {
        GetChapterTextHandler::new(self.scripture_reader.clone())
    }
}
