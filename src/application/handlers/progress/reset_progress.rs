//! ResetProgressHandler - wipes a reader's progress.

use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ProgressRepository;

pub struct ResetProgressHandler {
    repository: Arc<dyn ProgressRepository>,
}

impl ResetProgressHandler {
    pub fn new(repository: Arc<dyn ProgressRepository>) -> Self {
        Self { repository }
    }

    /// Deletes both day and chapter records. Not reversible.
    pub async fn handle(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.repository.reset(user_id).await?;
        warn!(user_id = %user_id, "reading progress reset");
        Ok(())
    }
}
