//! RFC-9457 Problem Details responses.

use axum::response::{IntoResponse, Response};
use http::{StatusCode, header};
use serde::Serialize;

/// An RFC-9457 "Problem Details" payload.
///
/// Error mappings build one of these and return it from a handler; the
/// `IntoResponse` impl takes care of the status line and the
/// `application/problem+json` content type. Domain error types implement
/// `From<DomainError> for Problem` so `?` works in handlers.
#[derive(Debug, Clone, Serialize)]
pub struct Problem {
    /// Problem type URI. `about:blank` unless a catalog entry applies.
    #[serde(rename = "type")]
    pub type_uri: String,
    /// Short, human-readable summary of the problem class.
    pub title: String,
    /// HTTP status code duplicated into the body.
    pub status: u16,
    /// Human-readable explanation specific to this occurrence.
    pub detail: String,
    /// URI of the specific occurrence, usually the request path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            type_uri: "about:blank".to_owned(),
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: None,
        }
    }

    /// Attach the occurrence URI (usually the request path).
    #[must_use]
    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    /// Status code as the typed `http` value.
    ///
    /// Falls back to 500 if the stored code is out of range, which can only
    /// happen if a caller hand-built the struct with a bogus status.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match serde_json::to_vec(&self) {
            Ok(body) => body,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize Problem body");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_rfc9457_fields() {
        let problem = Problem::new(StatusCode::NOT_FOUND, "Not Found", "No such station")
            .with_instance("/stations/42");

        let json = serde_json::to_value(&problem).unwrap();
        assert_eq!(json["type"], "about:blank");
        assert_eq!(json["title"], "Not Found");
        assert_eq!(json["status"], 404);
        assert_eq!(json["detail"], "No such station");
        assert_eq!(json["instance"], "/stations/42");
    }

    #[test]
    fn instance_is_omitted_when_absent() {
        let problem = Problem::new(StatusCode::CONFLICT, "Conflict", "Duplicate email");
        let json = serde_json::to_value(&problem).unwrap();
        assert!(json.get("instance").is_none());
    }

    #[test]
    fn response_carries_status_and_content_type() {
        let response =
            Problem::new(StatusCode::FORBIDDEN, "Forbidden", "Insufficient privileges")
                .into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/problem+json"
        );
    }
}
