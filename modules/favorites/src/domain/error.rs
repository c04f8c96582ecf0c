use thiserror::Error;
use uuid::Uuid;

/// Domain errors for favorites.
///
/// `NotOwner` is a data-level check, distinct from the auth layer's role
/// gate: the caller is authenticated and passed every declared role
/// requirement, the record just belongs to someone else.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Favorite not found: {id}")]
    FavoriteNotFound { id: Uuid },

    #[error("Favorite {id} is not owned by the caller")]
    NotOwner { id: Uuid },

    #[error("Unknown station: {id}")]
    UnknownStation { id: Uuid },

    #[error("No member registered for '{email}'")]
    UnknownMember { email: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    #[must_use]
    pub fn favorite_not_found(id: Uuid) -> Self {
        Self::FavoriteNotFound { id }
    }

    #[must_use]
    pub fn not_owner(id: Uuid) -> Self {
        Self::NotOwner { id }
    }

    #[must_use]
    pub fn unknown_station(id: Uuid) -> Self {
        Self::UnknownStation { id }
    }

    pub fn unknown_member(email: impl Into<String>) -> Self {
        Self::UnknownMember {
            email: email.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
