use thiserror::Error;
use uuid::Uuid;

/// Domain errors for the station registry.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Station not found: {id}")]
    StationNotFound { id: Uuid },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    #[must_use]
    pub fn station_not_found(id: Uuid) -> Self {
        Self::StationNotFound { id }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
