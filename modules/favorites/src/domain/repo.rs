use async_trait::async_trait;
use uuid::Uuid;

use super::error::DomainError;
use super::model::Favorite;

/// Storage seam for favorite records.
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn insert(&self, favorite: Favorite) -> Result<Favorite, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Favorite>, DomainError>;

    /// All favorites owned by `member_id`, ordered by creation time.
    async fn find_all_by_member(&self, member_id: Uuid) -> Result<Vec<Favorite>, DomainError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
