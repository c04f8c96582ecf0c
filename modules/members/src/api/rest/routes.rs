use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Extension, Router};
use http::Method;
use ml_auth::{RoutePolicyBuilder, TokenAuthService};
use ml_security::roles;

use super::handlers;
use crate::module::ConcreteMemberService;

/// Register the member routes and their access declarations.
///
/// - `POST /members` and `POST /login/token` are public (nobody has an
///   identity yet at that point);
/// - `/members/{id}` administration requires `ROLE_ADMIN`;
/// - `/members/me` requires any authenticated caller.
pub fn register_routes(
    router: Router,
    service: Arc<ConcreteMemberService>,
    auth: Arc<TokenAuthService>,
    policy: &mut RoutePolicyBuilder,
) -> anyhow::Result<Router> {
    policy.public(Method::POST, "/members")?;
    policy.public(Method::POST, "/login/token")?;

    policy.secured(Method::GET, "/members/{id}", [roles::ROLE_ADMIN])?;
    policy.secured(Method::PUT, "/members/{id}", [roles::ROLE_ADMIN])?;
    policy.secured(Method::DELETE, "/members/{id}", [roles::ROLE_ADMIN])?;

    policy.authenticated(Method::GET, "/members/me")?;
    policy.authenticated(Method::PUT, "/members/me")?;
    policy.authenticated(Method::DELETE, "/members/me")?;

    let routes = Router::new()
        .route("/members", post(handlers::create_member))
        .route(
            "/members/me",
            get(handlers::get_my_member)
                .put(handlers::update_my_member)
                .delete(handlers::delete_my_member),
        )
        .route(
            "/members/{id}",
            get(handlers::get_member)
                .put(handlers::update_member)
                .delete(handlers::delete_member),
        )
        .route("/login/token", post(handlers::login))
        .layer(Extension(service))
        .layer(Extension(auth));

    Ok(router.merge(routes))
}
