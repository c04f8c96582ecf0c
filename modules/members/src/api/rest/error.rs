use http::StatusCode;
use ml_http::Problem;

use crate::domain::error::DomainError;

/// Map member domain errors to RFC-9457 Problems so `?` works in handlers.
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        match &e {
            DomainError::MemberNotFound { id } => Problem::new(
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("Member with id {id} was not found"),
            ),
            DomainError::MemberNotFoundByEmail { email } => Problem::new(
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("Member '{email}' was not found"),
            ),
            DomainError::EmailAlreadyExists { email } => Problem::new(
                StatusCode::CONFLICT,
                "Conflict",
                format!("Email '{email}' is already in use"),
            ),
            DomainError::InvalidEmail { email } => Problem::new(
                StatusCode::BAD_REQUEST,
                "Bad Request",
                format!("Email '{email}' is invalid"),
            ),
            DomainError::Validation { field, message } => Problem::new(
                StatusCode::BAD_REQUEST,
                "Bad Request",
                format!("{field}: {message}"),
            ),
            DomainError::Internal(_) => {
                tracing::error!(error = ?e, "Internal error occurred");
                Problem::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "An internal error occurred",
                )
            }
        }
    }
}
