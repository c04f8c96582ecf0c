//! In-memory favorite storage.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::error::DomainError;
use crate::domain::model::Favorite;
use crate::domain::repo::FavoriteRepository;

/// Process-local favorite store.
#[derive(Default)]
pub struct InMemoryFavoriteRepository {
    favorites: DashMap<Uuid, Favorite>,
}

impl InMemoryFavoriteRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryFavoriteRepository {
    async fn insert(&self, favorite: Favorite) -> Result<Favorite, DomainError> {
        self.favorites.insert(favorite.id, favorite.clone());
        Ok(favorite)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Favorite>, DomainError> {
        Ok(self.favorites.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_all_by_member(&self, member_id: Uuid) -> Result<Vec<Favorite>, DomainError> {
        let mut favorites: Vec<Favorite> = self
            .favorites
            .iter()
            .filter(|entry| entry.value().member_id == member_id)
            .map(|entry| entry.value().clone())
            .collect();
        favorites.sort_by_key(|f| f.created_at);
        Ok(favorites)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        Ok(self.favorites.remove(&id).is_some())
    }
}
