//! SetChapterCompletionHandler - marks a single chapter read or unread.
//!
//! Completing the last open chapter of a schedule day completes the day as
//! well. Clearing a chapter never clears its day.

use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::plan::{schedule, DayPlan};
use crate::domain::progress::ChapterProgress;
use crate::ports::{Clock, ProgressRepository};

use super::require_chapter;

#[derive(Debug, Clone)]
pub struct SetChapterCompletionCommand {
    pub user_id: UserId,
    pub group_code: String,
    pub chapter: u32,
    pub completed: bool,
}

/// The stored chapter record, plus the day it completed if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterCompletion {
    #[serde(flatten)]
    pub record: ChapterProgress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_day: Option<u32>,
}

pub struct SetChapterCompletionHandler {
    repository: Arc<dyn ProgressRepository>,
    clock: Arc<dyn Clock>,
}

impl SetChapterCompletionHandler {
    pub fn new(repository: Arc<dyn ProgressRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(
        &self,
        cmd: SetChapterCompletionCommand,
    ) -> Result<ChapterCompletion, DomainError> {
        let group = require_chapter(&cmd.group_code, cmd.chapter)?;
        let now = self.clock.now();

        let record = self
            .repository
            .set_chapter_completed(&cmd.user_id, group.code, cmd.chapter, cmd.completed, now)
            .await?;

        info!(
            user_id = %cmd.user_id,
            group = group.code,
            chapter = cmd.chapter,
            completed = cmd.completed,
            "chapter completion updated"
        );

        let mut completed_day = None;
        if cmd.completed {
            if let Some(day) = schedule().day_covering(group.code, cmd.chapter) {
                if self.every_chapter_done(&cmd.user_id, day).await? {
                    self.repository
                        .set_day_completed(&cmd.user_id, day.day_number, true, now)
                        .await?;
                    info!(
                        user_id = %cmd.user_id,
                        day_number = day.day_number,
                        "day completed by its last chapter"
                    );
                    completed_day = Some(day.day_number);
                }
            }
        }

        Ok(ChapterCompletion {
            record,
            completed_day,
        })
    }

    async fn every_chapter_done(
        &self,
        user_id: &UserId,
        day: &DayPlan,
    ) -> Result<bool, DomainError> {
        let records = self.repository.chapter_progress(user_id).await?;
        let done: HashSet<(&str, u32)> = records
            .iter()
            .filter(|r| r.completed)
            .map(|r| (r.group_code.as_str(), r.chapter))
            .collect();
        Ok(day
            .units()
            .iter()
            .all(|unit| done.contains(&(unit.group_code, unit.chapter))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProgressStore;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use crate::ports::FixedClock;
    use chrono::NaiveDate;

    fn handler_over(store: Arc<InMemoryProgressStore>) -> SetChapterCompletionHandler {
        let clock = Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()));
        SetChapterCompletionHandler::new(store, clock)
    }

    fn handler() -> SetChapterCompletionHandler {
        handler_over(Arc::new(InMemoryProgressStore::new()))
    }

    fn command(group_code: &str, chapter: u32) -> SetChapterCompletionCommand {
        SetChapterCompletionCommand {
            user_id: UserId::new("reader").unwrap(),
            group_code: group_code.to_string(),
            chapter,
            completed: true,
        }
    }

    async fn completed_days(store: &InMemoryProgressStore) -> Vec<u32> {
        store
            .reading_progress(&UserId::new("reader").unwrap())
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.completed)
            .map(|r| r.day_number)
            .collect()
    }

    #[tokio::test]
    async fn known_chapter_is_recorded() {
        let result = handler().handle(command("psa", 150)).await.unwrap();
        assert_eq!(result.record.group_code, "psa");
        assert_eq!(result.record.chapter, 150);
        assert!(result.record.completed);
        assert!(result.completed_day.is_none());
    }

    #[tokio::test]
    async fn last_chapter_of_a_day_completes_the_day() {
        let store = Arc::new(InMemoryProgressStore::new());
        let handler = handler_over(store.clone());

        // Day 1 is 창 1-4; finish out of order.
        for chapter in [2, 4, 1] {
            let result = handler.handle(command("gen", chapter)).await.unwrap();
            assert!(result.completed_day.is_none());
        }
        assert!(completed_days(&store).await.is_empty());

        let result = handler.handle(command("gen", 3)).await.unwrap();
        assert_eq!(result.completed_day, Some(1));
        assert_eq!(completed_days(&store).await, vec![1]);
    }

    #[tokio::test]
    async fn day_spanning_two_groups_needs_both() {
        let store = Arc::new(InMemoryProgressStore::new());
        let handler = handler_over(store.clone());

        // Day 12 is 창 48-50, 출 1-2.
        for chapter in 48..=50 {
            handler.handle(command("gen", chapter)).await.unwrap();
        }
        handler.handle(command("exo", 1)).await.unwrap();
        assert!(completed_days(&store).await.is_empty());

        let result = handler.handle(command("exo", 2)).await.unwrap();
        assert_eq!(result.completed_day, Some(12));
    }

    #[tokio::test]
    async fn clearing_a_chapter_leaves_the_day_completed() {
        let store = Arc::new(InMemoryProgressStore::new());
        let handler = handler_over(store.clone());
        for chapter in 1..=4 {
            handler.handle(command("gen", chapter)).await.unwrap();
        }

        let result = handler
            .handle(SetChapterCompletionCommand {
                completed: false,
                ..command("gen", 2)
            })
            .await
            .unwrap();

        assert!(!result.record.completed);
        assert!(result.completed_day.is_none());
        assert_eq!(completed_days(&store).await, vec![1]);
    }

    #[tokio::test]
    async fn unknown_group_is_not_found() {
        let err = handler().handle(command("xyz", 1)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::SectionGroupNotFound);
    }

    #[tokio::test]
    async fn chapter_past_group_end_is_not_found() {
        let err = handler().handle(command("psa", 151)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ChapterNotFound);
        assert_eq!(err.details.get("chapters").map(String::as_str), Some("150"));

        let err = handler().handle(command("gen", 0)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ChapterNotFound);
    }

    #[test]
    fn completion_flattens_the_record() {
        let completion = ChapterCompletion {
            record: ChapterProgress::new("gen", 4, true, Timestamp::now()),
            completed_day: Some(1),
        };
        let json = serde_json::to_value(&completion).unwrap();
        assert_eq!(json["groupCode"], "gen");
        assert_eq!(json["completedDay"], 1);
    }
}
