//! Request-scoped identity for Metrolink services.
//!
//! The building blocks, leaves first:
//!
//! - [`Authentication`]: the immutable, resolved identity of one in-flight
//!   request (principal + authorities, credentials redacted).
//! - [`SecurityContext`]: the per-task holder that makes the current
//!   request's `Authentication` readable from any code path during handling.
//! - [`Principal`]: the lightweight projection handed to handlers.
//!
//! Verification (turning a bearer token into an `Authentication`) and
//! enforcement (role gates) live in `ml-auth`; this crate only models the
//! identity and its propagation.

pub mod authentication;
pub mod context;
pub mod principal;
pub mod roles;

pub use authentication::Authentication;
pub use context::SecurityContext;
pub use principal::Principal;
