//! Favorite routes.
//!
//! A favorite is a (source, target) station pair owned by one member. The
//! routes all require an authenticated caller; on top of that the service
//! enforces ownership: reading or deleting someone else's favorite is a
//! data-level violation, reported through this module's own error type and
//! not through the auth layer's role gate.

pub mod api;
pub mod domain;
pub mod infra;
pub mod module;

pub use domain::model::Favorite;
pub use domain::service::FavoriteService;
pub use module::{ConcreteFavoriteService, build_service, register_rest};
