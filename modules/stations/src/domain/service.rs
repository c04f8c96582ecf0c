use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;
use uuid::Uuid;

use super::error::DomainError;
use super::model::Station;
use super::repo::StationRepository;

/// Station business logic.
pub struct StationService<R: StationRepository> {
    repo: Arc<R>,
}

impl<R: StationRepository> StationService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn create_station(&self, name: &str) -> Result<Station, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name", "must not be empty"));
        }

        let station = self.repo.insert(Station::new(name.to_owned())).await?;
        tracing::info!(station_id = %station.id, name = %station.name, "Station created");
        Ok(station)
    }

    pub async fn list_stations(&self) -> Result<Vec<Station>, DomainError> {
        self.repo.list().await
    }

    #[instrument(skip(self), fields(station_id = %id))]
    pub async fn get_station(&self, id: Uuid) -> Result<Station, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::station_not_found(id))
    }

    #[instrument(skip(self), fields(station_id = %id))]
    pub async fn delete_station(&self, id: Uuid) -> Result<(), DomainError> {
        if self.repo.delete(id).await? {
            tracing::info!(station_id = %id, "Station deleted");
            Ok(())
        } else {
            Err(DomainError::station_not_found(id))
        }
    }
}

/// Lookup capability consumed by other modules; they never see the concrete
/// repository type behind the service.
#[async_trait]
pub trait StationDirectory: Send + Sync {
    async fn station_by_id(&self, id: Uuid) -> Option<Station>;
}

#[async_trait]
impl<R: StationRepository> StationDirectory for StationService<R> {
    async fn station_by_id(&self, id: Uuid) -> Option<Station> {
        self.repo.find_by_id(id).await.ok().flatten()
    }
}
