use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use http::Method;
use ml_auth::RoutePolicyBuilder;

use super::handlers;
use crate::module::ConcreteFavoriteService;

/// Register the favorite routes and their access declarations.
///
/// Every operation requires an authenticated caller; no role beyond that.
/// Ownership is checked in the domain service, not here.
pub fn register_routes(
    router: Router,
    service: Arc<ConcreteFavoriteService>,
    policy: &mut RoutePolicyBuilder,
) -> anyhow::Result<Router> {
    policy.authenticated(Method::POST, "/favorites")?;
    policy.authenticated(Method::GET, "/favorites")?;
    policy.authenticated(Method::GET, "/favorites/{id}")?;
    policy.authenticated(Method::DELETE, "/favorites/{id}")?;

    let routes = Router::new()
        .route(
            "/favorites",
            get(handlers::list_favorites).post(handlers::create_favorite),
        )
        .route(
            "/favorites/{id}",
            get(handlers::get_favorite).delete(handlers::delete_favorite),
        )
        .layer(Extension(service));

    Ok(router.merge(routes))
}
