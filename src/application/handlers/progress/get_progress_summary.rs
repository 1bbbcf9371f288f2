//! GetProgressSummaryHandler - overall and per-week completion.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::plan::schedule;
use crate::domain::progress::ProgressSummary;
use crate::ports::ProgressRepository;

pub struct GetProgressSummaryHandler {
    repository: Arc<dyn ProgressRepository>,
}

impl GetProgressSummaryHandler {
    pub fn new(repository: Arc<dyn ProgressRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<ProgressSummary, DomainError> {
        let records = self.repository.reading_progress(user_id).await?;
        Ok(ProgressSummary::compute(&records, schedule()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryProgressStore;
    use crate::domain::foundation::Timestamp;

    #[tokio::test]
    async fn summary_reflects_stored_days() {
        let store = Arc::new(InMemoryProgressStore::new());
        let reader = UserId::new("reader").unwrap();
        for day in 1..=3 {
            store.set_day_completed(&reader, day, true, Timestamp::now()).await.unwrap();
        }

        let summary = GetProgressSummaryHandler::new(store).handle(&reader).await.unwrap();

        assert_eq!(summary.completed_days, 3);
        assert_eq!(summary.total_days, 288);
        assert_eq!(summary.weeks[0].completed, 3);
        // 3/288 = 1.04%
        assert_eq!(summary.overall.value(), 1);
    }
}
