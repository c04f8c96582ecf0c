//! In-memory member storage.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::Member;
use crate::domain::repo::MemberRepository;

/// Process-local member store with an email uniqueness index.
#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: DashMap<Uuid, Member>,
    /// email → member id. Uniqueness is enforced through this index's
    /// entry API, so two concurrent inserts of the same email cannot both
    /// win.
    by_email: DashMap<String, Uuid>,
}

impl InMemoryMemberRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn insert(&self, member: Member) -> Result<Member, DomainError> {
        match self.by_email.entry(member.email.clone()) {
            Entry::Occupied(_) => Err(DomainError::email_already_exists(&member.email)),
            Entry::Vacant(slot) => {
                slot.insert(member.id);
                self.members.insert(member.id, member.clone());
                Ok(member)
            }
        }
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, DomainError> {
        Ok(self.members.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError> {
        let Some(id) = self.by_email.get(email).map(|entry| *entry.value()) else {
            return Ok(None);
        };
        self.find_by_id(id).await
    }

    async fn update(&self, member: Member) -> Result<Member, DomainError> {
        let Some(existing) = self.members.get(&member.id).map(|e| e.value().clone()) else {
            return Err(DomainError::member_not_found(member.id));
        };

        if existing.email != member.email {
            match self.by_email.entry(member.email.clone()) {
                Entry::Occupied(_) => {
                    return Err(DomainError::email_already_exists(&member.email));
                }
                Entry::Vacant(slot) => {
                    slot.insert(member.id);
                }
            }
            self.by_email.remove(&existing.email);
        }

        self.members.insert(member.id, member.clone());
        Ok(member)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let Some((_, member)) = self.members.remove(&id) else {
            return Ok(false);
        };
        self.by_email.remove(&member.email);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(email: &str) -> Member {
        Member::new(email.to_owned(), "password", 20, Vec::new())
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_email() {
        let repo = InMemoryMemberRepository::new();

        repo.insert(member("a@x.com")).await.unwrap();
        assert!(matches!(
            repo.insert(member("a@x.com")).await,
            Err(DomainError::EmailAlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn email_index_follows_updates() {
        let repo = InMemoryMemberRepository::new();

        let mut m = repo.insert(member("old@x.com")).await.unwrap();
        m.email = "new@x.com".to_owned();
        repo.update(m.clone()).await.unwrap();

        assert!(repo.find_by_email("old@x.com").await.unwrap().is_none());
        assert_eq!(
            repo.find_by_email("new@x.com").await.unwrap().map(|m| m.id),
            Some(m.id)
        );
    }

    #[tokio::test]
    async fn update_rejects_taken_email() {
        let repo = InMemoryMemberRepository::new();

        repo.insert(member("a@x.com")).await.unwrap();
        let mut b = repo.insert(member("b@x.com")).await.unwrap();
        b.email = "a@x.com".to_owned();

        assert!(matches!(
            repo.update(b).await,
            Err(DomainError::EmailAlreadyExists { .. })
        ));
    }

    #[tokio::test]
    async fn delete_clears_the_email_index() {
        let repo = InMemoryMemberRepository::new();

        let m = repo.insert(member("a@x.com")).await.unwrap();
        assert!(repo.delete(m.id).await.unwrap());

        assert!(repo.find_by_email("a@x.com").await.unwrap().is_none());
        // The freed email can be registered again.
        repo.insert(member("a@x.com")).await.unwrap();
    }
}
