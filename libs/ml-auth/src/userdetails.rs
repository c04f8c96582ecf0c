//! The identity-lookup capability consumed by the auth core.
//!
//! Whatever module owns member records implements these traits; the auth
//! core never sees the concrete storage type.

use async_trait::async_trait;

/// A stored identity record, viewed through the capability the auth core
/// needs: who it is, what it may do, and whether a candidate password
/// matches.
pub trait UserDetails: Send + Sync {
    /// Unique identifier of the identity (email).
    fn email(&self) -> &str;

    /// Granted role names, in grant order.
    fn authorities(&self) -> &[String];

    /// Whether `candidate` matches the stored secret.
    ///
    /// Pure function of the stored secret and the candidate; the secret
    /// itself is never exposed.
    fn check_password(&self, candidate: &str) -> bool;
}

/// Lookup boundary: email → identity record.
#[async_trait]
pub trait UserDetailsService: Send + Sync {
    /// Find the identity registered under `email`, if any.
    async fn find_by_email(&self, email: &str) -> Option<Box<dyn UserDetails>>;
}
