//! In-memory preferences repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::progress::{PreferencesUpdate, UserPreferences};
use crate::ports::PreferencesRepository;

#[derive(Debug, Default)]
pub struct InMemoryPreferencesStore {
    records: RwLock<HashMap<UserId, UserPreferences>>,
}

impl InMemoryPreferencesStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PreferencesRepository for InMemoryPreferencesStore {
    async fn preferences(&self, user_id: &UserId) -> Result<Option<UserPreferences>, DomainError> {
        Ok(self.records.read().await.get(user_id).cloned())
    }

    async fn update_preferences(
        &self,
        user_id: &UserId,
        update: PreferencesUpdate,
        at: Timestamp,
    ) -> Result<UserPreferences, DomainError> {
        let mut records = self.records.write().await;
        let record = records.entry(user_id.clone()).or_default();
        record.apply(&update, at);
        Ok(record.clone())
    }
}
