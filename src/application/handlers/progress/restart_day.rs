//! RestartDayHandler - clears one day so it can be read again.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::progress::DayChecklist;
use crate::ports::{Clock, ProgressRepository};

use super::require_day;

#[derive(Debug, Clone)]
pub struct RestartDayCommand {
    pub user_id: UserId,
    pub day_number: u32,
}

pub struct RestartDayHandler {
    repository: Arc<dyn ProgressRepository>,
    clock: Arc<dyn Clock>,
}

impl RestartDayHandler {
    pub fn new(repository: Arc<dyn ProgressRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Clears every chapter of the day, then the day flag. Returns the
    /// emptied checklist.
    pub async fn handle(&self, cmd: RestartDayCommand) -> Result<DayChecklist, DomainError> {
        let plan = require_day(cmd.day_number)?;
        let now = self.clock.now();

        for unit in plan.units() {
            self.repository
                .set_chapter_completed(&cmd.user_id, unit.group_code, unit.chapter, false, now)
                .await?;
        }
        self.repository
            .set_day_completed(&cmd.user_id, plan.day_number, false, now)
            .await?;

        info!(user_id = %cmd.user_id, day_number = plan.day_number, "day restarted");

        let records = self.repository.chapter_progress(&cmd.user_id).await?;
        Ok(DayChecklist::build(plan, &records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProgressStore;
    use crate::domain::foundation::{ErrorCode, Timestamp};
    use crate::ports::FixedClock;
    use chrono::NaiveDate;

    fn reader() -> UserId {
        UserId::new("reader").unwrap()
    }

    fn handler(store: Arc<InMemoryProgressStore>) -> RestartDayHandler {
        let clock = Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()));
        RestartDayHandler::new(store, clock)
    }

    async fn finish_days_one_and_two(store: &InMemoryProgressStore) {
        // Day 1 is 창 1-4, day 2 is 창 5-9.
        for chapter in 1..=9 {
            store
                .set_chapter_completed(&reader(), "gen", chapter, true, Timestamp::now())
                .await
                .unwrap();
        }
        for day in [1, 2] {
            store.set_day_completed(&reader(), day, true, Timestamp::now()).await.unwrap();
        }
    }

    #[tokio::test]
    async fn restart_clears_only_the_given_day() {
        let store = Arc::new(InMemoryProgressStore::new());
        finish_days_one_and_two(&store).await;

        let checklist = handler(store.clone())
            .handle(RestartDayCommand {
                user_id: reader(),
                day_number: 2,
            })
            .await
            .unwrap();
        assert_eq!(checklist.completed_count, 0);
        assert!(!checklist.all_completed);

        let days = store.reading_progress(&reader()).await.unwrap();
        assert!(days.iter().any(|r| r.day_number == 1 && r.completed));
        assert!(days.iter().any(|r| r.day_number == 2 && !r.completed));

        let done: Vec<u32> = store
            .chapter_progress(&reader())
            .await
            .unwrap()
            .into_iter()
            .filter(|r| r.completed)
            .map(|r| r.chapter)
            .collect();
        assert_eq!(done, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn other_readers_are_untouched() {
        let store = Arc::new(InMemoryProgressStore::new());
        let other = UserId::new("other").unwrap();
        store.set_day_completed(&other, 1, true, Timestamp::now()).await.unwrap();

        handler(store.clone())
            .handle(RestartDayCommand {
                user_id: reader(),
                day_number: 1,
            })
            .await
            .unwrap();

        assert!(store.reading_progress(&other).await.unwrap()[0].completed);
    }

    #[tokio::test]
    async fn unknown_day_is_not_found() {
        let err = handler(Arc::new(InMemoryProgressStore::new()))
            .handle(RestartDayCommand {
                user_id: reader(),
                day_number: 289,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DayNotFound);
    }
}
