//! Module wiring: concrete service type and REST registration.

use std::sync::Arc;

use axum::Router;
use ml_auth::RoutePolicyBuilder;

use members::MemberDirectory;
use stations::StationDirectory;

use crate::api::rest::routes;
use crate::domain::service::FavoriteService;
use crate::infra::storage::memory::InMemoryFavoriteRepository;

pub type ConcreteFavoriteService = FavoriteService<InMemoryFavoriteRepository>;

/// Build the favorite service over the in-memory store, wired to the member
/// and station lookup capabilities.
#[must_use]
pub fn build_service(
    members: Arc<dyn MemberDirectory>,
    stations: Arc<dyn StationDirectory>,
) -> Arc<ConcreteFavoriteService> {
    Arc::new(FavoriteService::new(
        Arc::new(InMemoryFavoriteRepository::new()),
        members,
        stations,
    ))
}

/// Attach the favorite REST surface to `router`, declaring route policies
/// as we go.
pub fn register_rest(
    router: Router,
    service: Arc<ConcreteFavoriteService>,
    policy: &mut RoutePolicyBuilder,
) -> anyhow::Result<Router> {
    tracing::info!("Favorites module: registering REST routes");
    routes::register_routes(router, service, policy)
}
