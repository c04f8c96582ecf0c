use thiserror::Error;
use uuid::Uuid;

/// Domain-specific errors for member accounts.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Member not found: {id}")]
    MemberNotFound { id: Uuid },

    #[error("Member not found: {email}")]
    MemberNotFoundByEmail { email: String },

    #[error("Member with email '{email}' already exists")]
    EmailAlreadyExists { email: String },

    #[error("Invalid email format: '{email}'")]
    InvalidEmail { email: String },

    #[error("Validation failed: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    #[must_use]
    pub fn member_not_found(id: Uuid) -> Self {
        Self::MemberNotFound { id }
    }

    pub fn member_not_found_by_email(email: impl Into<String>) -> Self {
        Self::MemberNotFoundByEmail {
            email: email.into(),
        }
    }

    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
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
