//! In-memory member directory.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::foundation::DomainError;
use crate::domain::progress::Member;
use crate::ports::MemberDirectory;

/// Members in registration order.
#[derive(Debug, Default)]
pub struct InMemoryMemberDirectory {
    members: RwLock<Vec<Member>>,
}

impl InMemoryMemberDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        Self {
            members: RwLock::new(members),
        }
    }

    /// Adds a member, or updates the display name of an existing one.
    pub async fn register(&self, member: Member) {
        let mut members = self.members.write().await;
        match members.iter_mut().find(|m| m.user_id == member.user_id) {
            Some(existing) => existing.display_name = member.display_name,
            None => members.push(member),
        }
    }
}

#[async_trait]
impl MemberDirectory for InMemoryMemberDirectory {
    async fn list_members(&self) -> Result<Vec<Member>, DomainError> {
        Ok(self.members.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    fn member(id: &str, name: &str) -> Member {
        Member {
            user_id: UserId::new(id).unwrap(),
            display_name: Some(name.to_string()),
        }
    }

    #[tokio::test]
    async fn register_keeps_order_and_updates_names() {
        let directory = InMemoryMemberDirectory::new();
        directory.register(member("a", "Ann")).await;
        directory.register(member("b", "Ben")).await;
        directory.register(member("a", "Anna")).await;

        let members = directory.list_members().await.unwrap();
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].display_name.as_deref(), Some("Anna"));
        assert_eq!(members[1].user_id.as_str(), "b");
    }
}
