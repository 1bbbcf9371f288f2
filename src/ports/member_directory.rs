//! Member directory port.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::progress::Member;

/// Read-only view of the reading group's profiles.
///
/// Profiles live with the external authentication provider.
#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// All members, in the order they should be displayed.
    async fn list_members(&self) -> Result<Vec<Member>, DomainError>;
}
