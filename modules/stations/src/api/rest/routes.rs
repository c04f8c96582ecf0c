use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};
use http::Method;
use ml_auth::RoutePolicyBuilder;

use super::handlers;
use crate::module::ConcreteStationService;

/// Register the station routes and their access declarations.
///
/// All station operations are public: lookups feed route planning for
/// anonymous visitors, and the acceptance flows create fixture stations
/// before anyone logs in.
pub fn register_routes(
    router: Router,
    service: Arc<ConcreteStationService>,
    policy: &mut RoutePolicyBuilder,
) -> anyhow::Result<Router> {
    policy.public(Method::POST, "/stations")?;
    policy.public(Method::GET, "/stations")?;
    policy.public(Method::GET, "/stations/{id}")?;
    policy.public(Method::DELETE, "/stations/{id}")?;

    let routes = Router::new()
        .route(
            "/stations",
            get(handlers::list_stations).post(handlers::create_station),
        )
        .route(
            "/stations/{id}",
            get(handlers::get_station).delete(handlers::delete_station),
        )
        .layer(Extension(service));

    Ok(router.merge(routes))
}
