use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A subway station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Station {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
        }
    }
}
