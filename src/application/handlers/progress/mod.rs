//! Progress command and query handlers.

mod get_day_checklist;
mod get_progress_summary;
mod reset_progress;
mod restart_day;
mod set_chapter_completion;
mod set_day_completion;

pub use get_day_checklist::{GetDayChecklistHandler, GetDayChecklistQuery};
pub use get_progress_summary::GetProgressSummaryHandler;
pub use reset_progress::ResetProgressHandler;
pub use restart_day::{RestartDayCommand, RestartDayHandler};
pub use set_chapter_completion::{
    ChapterCompletion, SetChapterCompletionCommand, SetChapterCompletionHandler,
};
pub use set_day_completion::{SetDayCompletionCommand, SetDayCompletionHandler};

use crate::domain::catalog::{section_group_by_code, SectionGroup};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::plan::{day_plan, DayPlan};

/// Resolves a day of the standard schedule or reports it missing.
pub(crate) fn require_day(day_number: u32) -> Result<&'static DayPlan, DomainError> {
    day_plan(day_number).ok_or_else(|| {
        DomainError::new(
            ErrorCode::DayNotFound,
            format!("Day {} is not part of the reading plan", day_number),
        )
    })
}

/// Resolves a catalog chapter or reports which part is missing.
pub(crate) fn require_chapter(
    group_code: &str,
    chapter: u32,
) -> Result<&'static SectionGroup, DomainError> {
    let group = section_group_by_code(group_code).ok_or_else(|| {
        DomainError::new(
            ErrorCode::SectionGroupNotFound,
            format!("Unknown section group '{}'", group_code),
        )
    })?;
    if !group.contains_chapter(chapter) {
        return Err(DomainError::new(
            ErrorCode::ChapterNotFound,
            format!("{} has no chapter {}", group.code, chapter),
        )
        .with_detail("chapters", group.chapters.to_string()));
    }
    Ok(group)
}
