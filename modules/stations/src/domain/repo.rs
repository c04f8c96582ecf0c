use async_trait::async_trait;
use uuid::Uuid;

use super::error::DomainError;
use super::model::Station;

/// Storage seam for station records. The in-memory implementation lives in
/// `infra::storage`; a persistent backend would slot in behind the same
/// trait.
#[async_trait]
pub trait StationRepository: Send + Sync {
    async fn insert(&self, station: Station) -> Result<Station, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Station>, DomainError>;

    /// All stations, ordered by creation time.
    async fn list(&self) -> Result<Vec<Station>, DomainError>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
