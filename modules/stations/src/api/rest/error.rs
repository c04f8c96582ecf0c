use http::StatusCode;
use ml_http::Problem;

use crate::domain::error::DomainError;

/// Map station domain errors to RFC-9457 Problems so `?` works in handlers.
impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        match &e {
            DomainError::StationNotFound { id } => Problem::new(
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("Station with id {id} was not found"),
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

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn not_found_maps_to_404() {
        let problem = Problem::from(DomainError::station_not_found(Uuid::new_v4()));
        assert_eq!(problem.status, 404);
    }

    #[test]
    fn validation_maps_to_400() {
        let problem = Problem::from(DomainError::validation("name", "must not be empty"));
        assert_eq!(problem.status, 400);
        assert!(problem.detail.contains("name"));
    }

    #[test]
    fn internal_maps_to_500_without_detail_leak() {
        let problem = Problem::from(DomainError::Internal("backend exploded".to_owned()));
        assert_eq!(problem.status, 500);
        assert!(!problem.detail.contains("exploded"));
    }
}
