//! Member accounts.
//!
//! Owns the identity records the auth layer verifies against: the `Member`
//! model implements the `UserDetails` capability and the member service
//! implements `UserDetailsService`, so `ml-auth` never sees the storage
//! type. On top of that sit the usual CRUD routes (self-service under
//! `/members/me`, administration under `/members/{id}`) and the login
//! endpoint that trades credentials for a bearer token.

pub mod api;
pub mod domain;
pub mod infra;
pub mod module;

pub use domain::model::Member;
pub use domain::service::{MemberDirectory, MemberFields, MemberService};
pub use module::{ConcreteMemberService, build_service, register_rest};
