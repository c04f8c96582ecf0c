//! Authentication and authorization for Metrolink HTTP services.
//!
//! Request flow: the [`middleware::auth_middleware`] resolves the route's
//! declared [`policy::RouteAccess`], verifies the bearer token through
//! [`service::TokenAuthService`], runs the [`access::enforce`] decision, and
//! only then dispatches the inner service, inside a
//! [`SecurityContext`](ml_security::SecurityContext) scope so handlers can
//! resolve the caller via the [`extract::AuthPrincipal`] extractor.
//!
//! Identity storage is not this crate's business: it consumes the
//! [`userdetails::UserDetailsService`] capability, implemented by whatever
//! module owns the member records.

pub mod access;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod policy;
pub mod service;
pub mod token;
pub mod userdetails;

pub use access::enforce;
pub use error::AuthError;
pub use extract::AuthPrincipal;
pub use middleware::{AuthState, auth_middleware};
pub use policy::{RouteAccess, RoutePolicy, RoutePolicyBuilder};
pub use service::TokenAuthService;
pub use token::{MemoryTokenStore, TokenStore};
pub use userdetails::{UserDetails, UserDetailsService};
