use std::sync::Arc;

use tracing::instrument;
use uuid::Uuid;

use members::MemberDirectory;
use stations::{Station, StationDirectory};

use super::error::DomainError;
use super::model::Favorite;
use super::repo::FavoriteRepository;

/// A favorite with its station endpoints resolved, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteView {
    pub id: Uuid,
    pub source: Station,
    pub target: Station,
}

/// Favorite business logic.
///
/// Callers are identified by principal email; the service resolves the
/// owning member per operation so a deleted account invalidates its
/// favorites access immediately.
pub struct FavoriteService<R: FavoriteRepository> {
    repo: Arc<R>,
    members: Arc<dyn MemberDirectory>,
    stations: Arc<dyn StationDirectory>,
}

impl<R: FavoriteRepository> FavoriteService<R> {
    pub fn new(
        repo: Arc<R>,
        members: Arc<dyn MemberDirectory>,
        stations: Arc<dyn StationDirectory>,
    ) -> Self {
        Self {
            repo,
            members,
            stations,
        }
    }

    #[instrument(skip(self), fields(member.email = %email, favorite.source = %source, favorite.target = %target))]
    pub async fn save_favorite(
        &self,
        email: &str,
        source: Uuid,
        target: Uuid,
    ) -> Result<FavoriteView, DomainError> {
        let member_id = self.member_id(email).await?;

        let source_station = self.station(source).await?;
        let target_station = self.station(target).await?;

        let favorite = self
            .repo
            .insert(Favorite::new(member_id, source, target))
            .await?;
        tracing::info!(favorite_id = %favorite.id, member_id = %member_id, "Favorite created");

        Ok(FavoriteView {
            id: favorite.id,
            source: source_station,
            target: target_station,
        })
    }

    pub async fn find_favorites(&self, email: &str) -> Result<Vec<FavoriteView>, DomainError> {
        let member_id = self.member_id(email).await?;

        let mut views = Vec::new();
        for favorite in self.repo.find_all_by_member(member_id).await? {
            views.push(self.resolve(favorite).await?);
        }
        Ok(views)
    }

    #[instrument(skip(self), fields(member.email = %email, favorite.id = %id))]
    pub async fn find_favorite(&self, email: &str, id: Uuid) -> Result<FavoriteView, DomainError> {
        let favorite = self.owned_favorite(email, id).await?;
        self.resolve(favorite).await
    }

    #[instrument(skip(self), fields(member.email = %email, favorite.id = %id))]
    pub async fn delete_favorite(&self, email: &str, id: Uuid) -> Result<(), DomainError> {
        let favorite = self.owned_favorite(email, id).await?;
        self.repo.delete(favorite.id).await?;
        tracing::info!(favorite_id = %id, "Favorite deleted");
        Ok(())
    }

    /// Fetch a favorite and verify the caller owns it. Existence is checked
    /// first, so a missing record reads as 404 rather than leaking whether
    /// someone else has it.
    async fn owned_favorite(&self, email: &str, id: Uuid) -> Result<Favorite, DomainError> {
        let favorite = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::favorite_not_found(id))?;

        let member_id = self.member_id(email).await?;
        if !favorite.is_owner(member_id) {
            return Err(DomainError::not_owner(id));
        }
        Ok(favorite)
    }

    async fn resolve(&self, favorite: Favorite) -> Result<FavoriteView, DomainError> {
        Ok(FavoriteView {
            id: favorite.id,
            source: self.station(favorite.source).await?,
            target: self.station(favorite.target).await?,
        })
    }

    async fn member_id(&self, email: &str) -> Result<Uuid, DomainError> {
        self.members
            .member_id_by_email(email)
            .await
            .ok_or_else(|| DomainError::unknown_member(email))
    }

    async fn station(&self, id: Uuid) -> Result<Station, DomainError> {
        self.stations
            .station_by_id(id)
            .await
            .ok_or_else(|| DomainError::unknown_station(id))
    }
}
