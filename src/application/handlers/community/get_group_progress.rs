//! GetGroupProgressHandler - how far each group member has read.

use std::sync::Arc;
use tracing::debug;

use crate::domain::calendar::ScheduleCalendar;
use crate::domain::foundation::DomainError;
use crate::domain::progress::{aggregate_group_progress, GroupProgress};
use crate::ports::{Clock, MemberDirectory, ProgressRepository};

pub struct GetGroupProgressHandler {
    directory: Arc<dyn MemberDirectory>,
    repository: Arc<dyn ProgressRepository>,
    clock: Arc<dyn Clock>,
    calendar: ScheduleCalendar,
}

impl GetGroupProgressHandler {
    pub fn new(
        directory: Arc<dyn MemberDirectory>,
        repository: Arc<dyn ProgressRepository>,
        clock: Arc<dyn Clock>,
        calendar: ScheduleCalendar,
    ) -> Self {
        Self {
            directory,
            repository,
            clock,
            calendar,
        }
    }

    pub async fn handle(&self) -> Result<GroupProgress, DomainError> {
        let today = self.calendar.date_to_day_number(self.clock.today());
        let members = self.directory.list_members().await?;
        let completions = self.repository.completed_days().await?;

        let progress = aggregate_group_progress(&members, &completions, today);
        debug!(
            members = progress.member_count,
            completed_today = progress.completed_today,
            "aggregated group progress"
        );
        Ok(progress)
    }
}
