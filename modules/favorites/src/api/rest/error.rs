use http::StatusCode;
use ml_http::Problem;

use crate::domain::error::DomainError;

/// Map favorite domain errors to RFC-9457 Problems so `?` works in handlers.
///
/// `NotOwner` maps to 403 like the role gate's rejection, but it is this
/// module's own data-level decision: the auth layer already admitted the
/// caller.
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        match &e {
            DomainError::FavoriteNotFound { id } => Problem::new(
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("Favorite with id {id} was not found"),
            ),
            DomainError::NotOwner { .. } => Problem::new(
                StatusCode::FORBIDDEN,
                "Forbidden",
                "This favorite belongs to another member",
            ),
            DomainError::UnknownStation { id } => Problem::new(
                StatusCode::BAD_REQUEST,
                "Bad Request",
                format!("Station {id} does not exist"),
            ),
            DomainError::UnknownMember { email } => Problem::new(
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("Member '{email}' was not found"),
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
