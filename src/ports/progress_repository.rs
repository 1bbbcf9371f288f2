//! Progress repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::progress::{ChapterProgress, CompletedDay, ReadingProgress};

/// Storage for per-reader completion flags.
///
/// Writes are upserts keyed by (user, day) and (user, group, chapter);
/// setting a flag twice leaves one record.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// All day-level records of a reader.
    async fn reading_progress(&self, user_id: &UserId) -> Result<Vec<ReadingProgress>, DomainError>;

    /// Sets or clears a day's completion flag.
    async fn set_day_completed(
        &self,
        user_id: &UserId,
        day_number: u32,
        completed: bool,
        at: Timestamp,
    ) -> Result<ReadingProgress, DomainError>;

    /// All chapter-level records of a reader.
    async fn chapter_progress(&self, user_id: &UserId) -> Result<Vec<ChapterProgress>, DomainError>;

    /// Sets or clears a chapter's completion flag.
    async fn set_chapter_completed(
        &self,
        user_id: &UserId,
        group_code: &str,
        chapter: u32,
        completed: bool,
        at: Timestamp,
    ) -> Result<ChapterProgress, DomainError>;

    /// Every completed day of every reader.
    async fn completed_days(&self) -> Result<Vec<CompletedDay>, DomainError>;

    /// Deletes both day and chapter records of a reader.
    async fn reset(&self, user_id: &UserId) -> Result<(), DomainError>;
}
