//! UpdatePreferencesHandler - partial upsert of a reader's preferences.

use std::sync::Arc;
use tracing::info;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::progress::{PreferencesUpdate, UserPreferences};
use crate::ports::{Clock, PreferencesRepository};

#[derive(Debug, Clone)]
pub struct UpdatePreferencesCommand {
    pub user_id: UserId,
    pub update: PreferencesUpdate,
}

pub struct UpdatePreferencesHandler {
    repository: Arc<dyn PreferencesRepository>,
    clock: Arc<dyn Clock>,
}

impl UpdatePreferencesHandler {
    pub fn new(repository: Arc<dyn PreferencesRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Fields absent from the update keep their stored value.
    pub async fn handle(
        &self,
        cmd: UpdatePreferencesCommand,
    ) -> Result<UserPreferences, DomainError> {
        cmd.update.validate()?;

        let prefs = self
            .repository
            .update_preferences(&cmd.user_id, cmd.update, self.clock.now())
            .await?;

        info!(
            user_id = %cmd.user_id,
            version = %prefs.bible_version,
            font_size = prefs.font_size,
            "preferences updated"
        );
        Ok(prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPreferencesStore;
    use crate::domain::catalog::ScriptureVersion;
    use crate::domain::foundation::ErrorCode;
    use crate::ports::FixedClock;
    use chrono::NaiveDate;

    fn handler(store: Arc<InMemoryPreferencesStore>) -> UpdatePreferencesHandler {
        let clock = Arc::new(FixedClock::on(NaiveDate::from_ymd_opt(2026, 2, 3).unwrap()));
        UpdatePreferencesHandler::new(store, clock)
    }

    fn command(update: PreferencesUpdate) -> UpdatePreferencesCommand {
        UpdatePreferencesCommand {
            user_id: UserId::new("reader").unwrap(),
            update,
        }
    }

    #[tokio::test]
    async fn successive_partial_updates_accumulate() {
        let handler = handler(Arc::new(InMemoryPreferencesStore::new()));

        handler
            .handle(command(PreferencesUpdate {
                font_size: Some(20),
                ..Default::default()
            }))
            .await
            .unwrap();
        let prefs = handler
            .handle(command(PreferencesUpdate {
                bible_version: Some(ScriptureVersion::Nkrv),
                start_date: NaiveDate::from_ymd_opt(2026, 3, 1),
                ..Default::default()
            }))
            .await
            .unwrap();

        assert_eq!(prefs.font_size, 20);
        assert_eq!(prefs.bible_version, ScriptureVersion::Nkrv);
        assert_eq!(prefs.start_date, NaiveDate::from_ymd_opt(2026, 3, 1));
    }

    #[tokio::test]
    async fn invalid_font_size_is_rejected_before_storing() {
        let store = Arc::new(InMemoryPreferencesStore::new());
        let err = handler(store.clone())
            .handle(command(PreferencesUpdate {
                font_size: Some(40),
                ..Default::default()
            }))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert!(store
            .preferences(&UserId::new("reader").unwrap())
            .await
            .unwrap()
            .is_none());
    }
}
