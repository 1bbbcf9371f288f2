//! GetDayChecklistHandler - chapter-level view of one day.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::progress::DayChecklist;
use crate::ports::ProgressRepository;

use super::require_day;

#[derive(Debug, Clone)]
pub struct GetDayChecklistQuery {
    pub user_id: UserId,
    pub day_number: u32,
}

pub struct GetDayChecklistHandler {
    repository: Arc<dyn ProgressRepository>,
}

impl GetDayChecklistHandler {
    pub fn new(repository: Arc<dyn ProgressRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetDayChecklistQuery) -> Result<DayChecklist, DomainError> {
        let plan = require_day(query.day_number)?;
        let records = self.repository.chapter_progress(&query.user_id).await?;
        Ok(DayChecklist::build(plan, &records))
    }
}
