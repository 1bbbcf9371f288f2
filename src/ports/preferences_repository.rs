//! Reader preferences port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::progress::{PreferencesUpdate, UserPreferences};

/// Storage for one preferences record per reader.
///
/// Kept apart from [`ProgressRepository`](super::ProgressRepository) so a
/// progress reset leaves preferences in place.
#[async_trait]
pub trait PreferencesRepository: Send + Sync {
    /// `None` until the reader saves preferences for the first time.
    async fn preferences(&self, user_id: &UserId) -> Result<Option<UserPreferences>, DomainError>;

    /// Merges `update` into the stored record, starting from the defaults
    /// when there is none, and returns the result.
    async fn update_preferences(
        &self,
        user_id: &UserId,
        update: PreferencesUpdate,
        at: Timestamp,
    ) -> Result<UserPreferences, DomainError>;
}
