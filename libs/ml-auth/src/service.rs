//! Credential verification: login and bearer token authentication.

use std::sync::Arc;

use ml_security::Authentication;

use crate::error::AuthError;
use crate::token::TokenStore;
use crate::userdetails::UserDetailsService;

/// Verifies credentials against the identity-lookup capability and turns
/// bearer tokens into [`Authentication`] records.
///
/// This sits upstream of the core context/enforcement machinery: it runs at
/// most once per request (in the middleware) and is the only place an
/// `Authentication` is constructed.
pub struct TokenAuthService {
    users: Arc<dyn UserDetailsService>,
    tokens: Arc<dyn TokenStore>,
}

impl TokenAuthService {
    pub fn new(users: Arc<dyn UserDetailsService>, tokens: Arc<dyn TokenStore>) -> Self {
        Self { users, tokens }
    }

    /// Verify an email/password pair and issue an opaque bearer token.
    ///
    /// Unknown email and wrong password are deliberately indistinguishable
    /// to the caller; both come back as `Unauthenticated`.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let Some(user) = self.users.find_by_email(email).await else {
            tracing::debug!(email, "Login rejected: unknown email");
            return Err(AuthError::Unauthenticated);
        };

        if !user.check_password(password) {
            tracing::debug!(email, "Login rejected: password mismatch");
            return Err(AuthError::Unauthenticated);
        }

        Ok(self.tokens.issue(user.email()).await)
    }

    /// Resolve a presented bearer token into a request `Authentication`.
    ///
    /// Authorities are re-read from the identity record at resolution time,
    /// so a role change takes effect on the next request, not on the next
    /// login.
    pub async fn authenticate(&self, bearer_token: &str) -> Result<Authentication, AuthError> {
        if bearer_token.is_empty() {
            return Err(AuthError::Unauthenticated);
        }

        let Some(email) = self.tokens.resolve(bearer_token).await else {
            tracing::debug!("Authentication rejected: unknown token");
            return Err(AuthError::Unauthenticated);
        };

        // The identity may have been deleted since the token was issued.
        let Some(user) = self.users.find_by_email(&email).await else {
            tracing::debug!(email, "Authentication rejected: identity no longer exists");
            return Err(AuthError::Unauthenticated);
        };

        Ok(Authentication::builder()
            .principal(user.email())
            .credentials(bearer_token.to_owned())
            .authorities(user.authorities().to_vec())
            .build())
    }

    /// Invalidate a bearer token (logout).
    pub async fn revoke(&self, bearer_token: &str) -> bool {
        self.tokens.revoke(bearer_token).await
    }
}
