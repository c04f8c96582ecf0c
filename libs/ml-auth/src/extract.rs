//! Principal resolution for handler parameters.

use axum::extract::FromRequestParts;
use http::request::Parts;
use ml_security::{Principal, SecurityContext};

use crate::error::AuthError;

/// Extractor that materializes the current caller as a [`Principal`].
///
/// Reads the request's `SecurityContext`; a handler declaring this parameter
/// gets a fully-formed principal or is never invoked at all (the rejection
/// is a 401 Problem). Public routes may declare it too; they just reject
/// anonymous callers.
#[derive(Debug, Clone)]
pub struct AuthPrincipal(pub Principal);

impl<S> FromRequestParts<S> for AuthPrincipal
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(_parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        SecurityContext::current()
            .map(|authentication| AuthPrincipal(Principal::from_authentication(&authentication)))
            .ok_or(AuthError::Unauthenticated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::FromRequestParts;
    use ml_security::Authentication;

    fn parts() -> Parts {
        let (parts, ()) = http::Request::builder()
            .uri("/members/me")
            .body(())
            .unwrap()
            .into_parts();
        parts
    }

    #[tokio::test]
    async fn resolves_the_scoped_authentication() {
        let auth = Authentication::builder()
            .principal("user@x.com")
            .authorities(vec!["ROLE_MEMBER".to_owned()])
            .build();

        let resolved = SecurityContext::scope(auth, async {
            AuthPrincipal::from_request_parts(&mut parts(), &()).await
        })
        .await
        .unwrap();

        assert_eq!(resolved.0.email(), "user@x.com");
        assert_eq!(resolved.0.authorities(), &["ROLE_MEMBER"]);
    }

    #[tokio::test]
    async fn rejects_when_no_authentication_is_in_scope() {
        let result = SecurityContext::unauthenticated_scope(async {
            AuthPrincipal::from_request_parts(&mut parts(), &()).await
        })
        .await;

        assert!(matches!(result, Err(AuthError::Unauthenticated)));
    }

    #[tokio::test]
    async fn resolution_succeeds_even_with_empty_authorities() {
        // Authentication and authorization are independent checks.
        let auth = Authentication::builder()
            .principal("bare@x.com")
            .authorities(Vec::new())
            .build();

        let resolved = SecurityContext::scope(auth, async {
            AuthPrincipal::from_request_parts(&mut parts(), &()).await
        })
        .await
        .unwrap();

        assert_eq!(resolved.0.email(), "bare@x.com");
        assert!(resolved.0.authorities().is_empty());
    }
}
