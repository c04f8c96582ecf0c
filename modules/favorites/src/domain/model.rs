use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A member's favorite route: a source/target station pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favorite {
    pub id: Uuid,
    pub member_id: Uuid,
    pub source: Uuid,
    pub target: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Favorite {
    #[must_use]
    pub fn new(member_id: Uuid, source: Uuid, target: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            member_id,
            source,
            target,
            created_at: Utc::now(),
        }
    }

    /// Whether `member_id` owns this favorite.
    #[must_use]
    pub fn is_owner(&self, member_id: Uuid) -> bool {
        self.member_id == member_id
    }
}
