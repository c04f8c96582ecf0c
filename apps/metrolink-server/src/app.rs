//! Application assembly: services, seeding, routers, and the auth gate.

use std::sync::Arc;

use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use ml_auth::{AuthState, MemoryTokenStore, RoutePolicyBuilder, TokenAuthService, auth_middleware};

use crate::config::AppConfig;

/// Build the complete application router.
///
/// Wiring order matters only in one place: every module router is merged
/// first, and the auth gate is layered over the merged result so it runs
/// before any handler; route policies declared during registration are
/// compiled into the gate's table here.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let member_service = members::build_service();
    let station_service = stations::build_service();
    let favorite_service =
        favorites::build_service(member_service.clone(), station_service.clone());

    let auth_service = Arc::new(TokenAuthService::new(
        member_service.clone(),
        Arc::new(MemoryTokenStore::new()),
    ));

    seed_members(cfg, &member_service).await?;

    let mut policy = RoutePolicyBuilder::new(cfg.auth.require_auth_by_default);

    let mut router = Router::new();
    router = members::register_rest(
        router,
        member_service,
        auth_service.clone(),
        &mut policy,
    )?;
    router = stations::register_rest(router, station_service, &mut policy)?;
    router = favorites::register_rest(router, favorite_service, &mut policy)?;

    let auth_state = AuthState::new(auth_service, Arc::new(policy.build()));

    Ok(router
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .layer(TraceLayer::new_for_http()))
}

/// Create the configured seed accounts. A seed whose email is already taken
/// is skipped, so restarts with a persistent store do not fail here.
async fn seed_members(
    cfg: &AppConfig,
    service: &Arc<members::ConcreteMemberService>,
) -> anyhow::Result<()> {
    for seed in &cfg.auth.seed_members {
        let fields = members::MemberFields {
            email: seed.email.clone(),
            password: seed.password.clone(),
            age: seed.age,
        };
        match service
            .create_member_with_roles(fields, seed.roles.clone())
            .await
        {
            Ok(member) => {
                tracing::info!(email = %member.email, roles = ?member.roles, "Seeded member");
            }
            Err(members::domain::error::DomainError::EmailAlreadyExists { email }) => {
                tracing::warn!(%email, "Seed member already exists, skipping");
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}
