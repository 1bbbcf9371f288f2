//! SetDayCompletionHandler - marks a schedule day read or unread.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::progress::ReadingProgress;
use crate::ports::{Clock, ProgressRepository};

use super::require_day;

#[derive(Debug, Clone)]
pub struct SetDayCompletionCommand {
    pub user_id: UserId,
    pub day_number: u32,
    pub completed: bool,
}

pub struct SetDayCompletionHandler {
    repository: Arc<dyn ProgressRepository>,
    clock: Arc<dyn Clock>,
}

impl SetDayCompletionHandler {
    pub fn new(repository: Arc<dyn ProgressRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self, cmd: SetDayCompletionCommand) -> Result<ReadingProgress, DomainError> {
        require_day(cmd.day_number)?;

        let record = self
            .repository
            .set_day_completed(&cmd.user_id, cmd.day_number, cmd.completed, self.clock.now())
            .await?;

        info!(
            user_id = %cmd.user_id,
            day = cmd.day_number,
            completed = cmd.completed,
            "day completion updated"
        );
        Ok(record)
    }
}
