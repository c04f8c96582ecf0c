//! Module wiring: concrete service type and REST registration.

use std::sync::Arc;

use axum::Router;
use ml_auth::{RoutePolicyBuilder, TokenAuthService};

use crate::api::rest::routes;
use crate::domain::service::MemberService;
use crate::infra::storage::memory::InMemoryMemberRepository;

pub type ConcreteMemberService = MemberService<InMemoryMemberRepository>;

/// Build the member service over the in-memory store.
#[must_use]
pub fn build_service() -> Arc<ConcreteMemberService> {
    Arc::new(MemberService::new(Arc::new(
        InMemoryMemberRepository::new(),
    )))
}

/// Attach the member REST surface (including login) to `router`, declaring
/// route policies as we go.
pub fn register_rest(
    router: Router,
    service: Arc<ConcreteMemberService>,
    auth: Arc<TokenAuthService>,
    policy: &mut RoutePolicyBuilder,
) -> anyhow::Result<Router> {
    tracing::info!("Members module: registering REST routes");
    routes::register_routes(router, service, auth, policy)
}
