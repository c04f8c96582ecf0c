//! Error taxonomy for the auth layer.

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use ml_http::Problem;
use thiserror::Error;

/// Authentication/authorization failures.
///
/// The two front-line variants are deliberately distinct: `Unauthenticated`
/// means no valid identity was presented for this request, `Forbidden` means
/// the identity is valid but lacks a required role. Neither is ever retried;
/// both are terminal for the request.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No valid `Authentication` present when one was required.
    #[error("unauthenticated")]
    Unauthenticated,

    /// Valid identity, insufficient privilege for the operation.
    #[error("forbidden")]
    Forbidden,

    /// Broken wiring, e.g. the gate consulted outside a request scope.
    #[error("internal auth error: {0}")]
    Internal(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let problem = match &self {
            AuthError::Unauthenticated => Problem::new(
                StatusCode::UNAUTHORIZED,
                "Unauthorized",
                "Authentication is required to access this resource",
            ),
            AuthError::Forbidden => Problem::new(
                StatusCode::FORBIDDEN,
                "Forbidden",
                "You do not have permission to perform this action",
            ),
            AuthError::Internal(_) => Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "Internal authentication error",
            ),
        };
        problem.into_response()
    }
}
