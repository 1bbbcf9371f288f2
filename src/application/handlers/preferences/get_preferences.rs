//! GetPreferencesHandler - a reader's preferences, defaults if never saved.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::progress::UserPreferences;
use crate::ports::PreferencesRepository;

pub struct GetPreferencesHandler {
    repository: Arc<dyn PreferencesRepository>,
}

impl GetPreferencesHandler {
    pub fn new(repository: Arc<dyn PreferencesRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<UserPreferences, DomainError> {
        Ok(self
            .repository
            .preferences(user_id)
            .await?
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPreferencesStore;
    use crate::domain::catalog::ScriptureVersion;
    use crate::domain::foundation::Timestamp;
    use crate::domain::progress::PreferencesUpdate;

    #[tokio::test]
    async fn new_reader_gets_defaults() {
        let handler = GetPreferencesHandler::new(Arc::new(InMemoryPreferencesStore::new()));
        let prefs = handler.handle(&UserId::new("reader").unwrap()).await.unwrap();
        assert_eq!(prefs, UserPreferences::default());
    }

    #[tokio::test]
    async fn saved_preferences_are_returned() {
        let store = Arc::new(InMemoryPreferencesStore::new());
        let reader = UserId::new("reader").unwrap();
        store
            .update_preferences(
                &reader,
                PreferencesUpdate {
                    bible_version: Some(ScriptureVersion::Nkrv),
                    ..Default::default()
                },
                Timestamp::now(),
            )
            .await
            .unwrap();

        let prefs = GetPreferencesHandler::new(store).handle(&reader).await.unwrap();
        assert_eq!(prefs.bible_version, ScriptureVersion::Nkrv);
        assert!(prefs.updated_at.is_some());
    }
}
