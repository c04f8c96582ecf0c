//! The authentication gate.
//!
//! One middleware guards every route: it resolves the route's declared
//! access level, verifies the bearer token, runs the role decision, and only
//! then dispatches the inner service, with the resolved `Authentication`
//! installed in the request's `SecurityContext` scope. A denied request
//! never reaches handler code.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::{HeaderMap, Method};
use ml_security::SecurityContext;

use crate::access::enforce;
use crate::error::AuthError;
use crate::policy::{RouteAccess, RoutePolicy};
use crate::service::TokenAuthService;

/// Shared state for the authentication gate.
#[derive(Clone)]
pub struct AuthState {
    pub authenticator: Arc<TokenAuthService>,
    pub policy: Arc<RoutePolicy>,
}

impl AuthState {
    pub fn new(authenticator: Arc<TokenAuthService>, policy: Arc<RoutePolicy>) -> Self {
        Self {
            authenticator,
            policy,
        }
    }
}

/// Gate middleware; layer it with `axum::middleware::from_fn_with_state`.
///
/// For each request:
/// 1. skips CORS preflight requests;
/// 2. resolves the route's [`RouteAccess`] from the policy table;
/// 3. public routes run with an explicitly empty context;
/// 4. guarded routes: bearer token → `Authentication` → role decision,
///    then the rest of the request runs inside the context scope.
pub async fn auth_middleware(
    State(state): State<AuthState>,
    req: Request,
    next: Next,
) -> Response {
    if is_preflight_request(req.method(), req.headers()) {
        return next.run(req).await;
    }

    let path = req.uri().path().to_owned();

    match state.policy.resolve(req.method(), &path) {
        RouteAccess::Public => SecurityContext::unauthenticated_scope(next.run(req)).await,
        RouteAccess::Authenticated { required_roles } => {
            let Some(token) = extract_bearer_token(req.headers()).map(str::to_owned) else {
                return reject(AuthError::Unauthenticated, &path);
            };

            let authentication = match state.authenticator.authenticate(&token).await {
                Ok(authentication) => authentication,
                Err(err) => return reject(err, &path),
            };

            if let Err(err) = enforce(&required_roles, Some(&authentication)) {
                return reject(err, &path);
            }

            SecurityContext::scope(authentication, next.run(req)).await
        }
    }
}

fn reject(err: AuthError, path: &str) -> Response {
    match &err {
        AuthError::Unauthenticated => tracing::debug!(path, "Request rejected: unauthenticated"),
        AuthError::Forbidden => tracing::debug!(path, "Request rejected: insufficient privilege"),
        AuthError::Internal(msg) => tracing::error!(path, error = %msg, "Auth internal error"),
    }

    err.into_response()
}

/// Extract the token from an `Authorization: Bearer ...` header.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer ").map(str::trim))
}

/// Preflight requests are OPTIONS requests with an Origin and an
/// Access-Control-Request-Method header.
fn is_preflight_request(method: &Method, headers: &HeaderMap) -> bool {
    method == Method::OPTIONS
        && headers.contains_key(http::header::ORIGIN)
        && headers.contains_key(http::header::ACCESS_CONTROL_REQUEST_METHOD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_extraction_strips_scheme_and_whitespace() {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::AUTHORIZATION, "Bearer  abc123 ".parse().unwrap());
        assert_eq!(extract_bearer_token(&headers), Some("abc123"));
    }

    #[test]
    fn non_bearer_authorization_is_ignored() {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::AUTHORIZATION, "Basic dXNlcjpwdw==".parse().unwrap());
        assert_eq!(extract_bearer_token(&headers), None);
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn preflight_needs_all_three_markers() {
        let mut headers = HeaderMap::new();
        headers.insert(http::header::ORIGIN, "https://app.example".parse().unwrap());
        headers.insert(
            http::header::ACCESS_CONTROL_REQUEST_METHOD,
            "POST".parse().unwrap(),
        );

        assert!(is_preflight_request(&Method::OPTIONS, &headers));
        assert!(!is_preflight_request(&Method::POST, &headers));
        assert!(!is_preflight_request(&Method::OPTIONS, &HeaderMap::new()));
    }
}
