//! Module wiring: concrete service type and REST registration.

use std::sync::Arc;

use axum::Router;
use ml_auth::RoutePolicyBuilder;

use crate::api::rest::routes;
use crate::domain::service::StationService;
use crate::infra::storage::memory::InMemoryStationRepository;

pub type ConcreteStationService = StationService<InMemoryStationRepository>;

/// Build the station service over the in-memory store.
#[must_use]
pub fn build_service() -> Arc<ConcreteStationService> {
    Arc::new(StationService::new(Arc::new(
        InMemoryStationRepository::new(),
    )))
}

/// Attach the station REST surface to `router`, declaring route policies as
/// we go.
pub fn register_rest(
    router: Router,
    service: Arc<ConcreteStationService>,
    policy: &mut RoutePolicyBuilder,
) -> anyhow::Result<Router> {
    tracing::info!("Stations module: registering REST routes");
    routes::register_routes(router, service, policy)
}
