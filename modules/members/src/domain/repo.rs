use async_trait::async_trait;
use uuid::Uuid;

use super::error::DomainError;
use super::model::Member;

/// Storage seam for member records.
///
/// Email uniqueness is the repository's invariant: `insert` and `update`
/// must reject a record whose email is already registered to a different
/// member.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn insert(&self, member: Member) -> Result<Member, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Member>, DomainError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<Member>, DomainError>;

    /// Replace the record with `member.id`. Errors if it does not exist or
    /// the new email is taken.
    async fn update(&self, member: Member) -> Result<Member, DomainError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
