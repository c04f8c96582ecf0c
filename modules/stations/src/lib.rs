//! Station registry.
//!
//! Plain CRUD over the station records plus the lookup-by-id capability
//! other modules (favorites) consume. Layering follows the house style:
//! `api` (REST surface) → `domain` (service, errors, repository trait) →
//! `infra` (storage implementation); dependencies point one way only.

pub mod api;
pub mod domain;
pub mod infra;
pub mod module;

pub use domain::model::Station;
pub use domain::service::{StationDirectory, StationService};
pub use module::{ConcreteStationService, build_service, register_rest};
