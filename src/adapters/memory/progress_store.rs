//! In-memory progress repository.

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::progress::{ChapterProgress, CompletedDay, ReadingProgress};
use crate::ports::ProgressRepository;

#[derive(Debug, Default)]
struct ReaderRecords {
    days: BTreeMap<u32, ReadingProgress>,
    chapters: BTreeMap<(String, u32), ChapterProgress>,
}

/// Progress records keyed by reader, upserted in place.
#[derive(Debug, Default)]
pub struct InMemoryProgressStore {
    readers: RwLock<HashMap<UserId, ReaderRecords>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of readers with at least one record.
    pub async fn reader_count(&self) -> usize {
        self.readers.read().await.len()
    }
}

#[async_trait]
impl ProgressRepository for InMemoryProgressStore {
    async fn reading_progress(&self, user_id: &UserId) -> Result<Vec<ReadingProgress>, DomainError> {
        Ok(self
            .readers
            .read()
            .await
            .get(user_id)
            .map(|records| records.days.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn set_day_completed(
        &self,
        user_id: &UserId,
        day_number: u32,
        completed: bool,
        at: Timestamp,
    ) -> Result<ReadingProgress, DomainError> {
        let record = ReadingProgress::new(day_number, completed, at);
        self.readers
            .write()
            .await
            .entry(user_id.clone())
            .or_default()
            .days
            .insert(day_number, record.clone());
        Ok(record)
    }

    async fn chapter_progress(&self, user_id: &UserId) -> Result<Vec<ChapterProgress>, DomainError> {
        Ok(self
            .readers
            .read()
            .await
            .get(user_id)
            .map(|records| records.chapters.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn set_chapter_completed(
        &self,
        user_id: &UserId,
        group_code: &str,
        chapter: u32,
        completed: bool,
        at: Timestamp,
    ) -> Result<ChapterProgress, DomainError> {
        let record = ChapterProgress::new(group_code, chapter, completed, at);
        self.readers
            .write()
            .await
            .entry(user_id.clone())
            .or_default()
            .chapters
            .insert((group_code.to_string(), chapter), record.clone());
        Ok(record)
    }

    async fn completed_days(&self) -> Result<Vec<CompletedDay>, DomainError> {
        let readers = self.readers.read().await;
        Ok(readers
            .iter()
            .flat_map(|(user_id, records)| {
                records
                    .days
                    .values()
                    .filter(|r| r.completed)
                    .map(move |r| CompletedDay {
                        user_id: user_id.clone(),
                        day_number: r.day_number,
                    })
            })
            .collect())
    }

    async fn reset(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.readers.write().await.remove(user_id);
        Ok(())
    }
}
