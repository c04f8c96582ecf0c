//! In-memory station storage.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::Station;
use crate::domain::repo::StationRepository;

/// Process-local station store.
#[derive(Default)]
pub struct InMemoryStationRepository {
    stations: DashMap<Uuid, Station>,
}

impl InMemoryStationRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StationRepository for InMemoryStationRepository {
    async fn insert(&self, station: Station) -> Result<Station, DomainError> {
        self.stations.insert(station.id, station.clone());
        Ok(station)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Station>, DomainError> {
        Ok(self.stations.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<Station>, DomainError> {
        let mut stations: Vec<Station> = self
            .stations
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        stations.sort_by_key(|s| s.created_at);
        Ok(stations)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.stations.remove(&id).is_some())
    }
}
