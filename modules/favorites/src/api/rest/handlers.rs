use std::sync::Arc;

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use http::{StatusCode, header};
use uuid::Uuid;

use ml_auth::AuthPrincipal;
use ml_http::Problem;

use crate::api::rest::dto::{FavoriteDto, FavoriteReq};
use crate::module::ConcreteFavoriteService;

#[tracing::instrument(
    skip(svc, principal, req_body),
    fields(member.email = %principal.0.email(), favorite.source = %req_body.source, favorite.target = %req_body.target)
)]
pub(crate) async fn create_favorite(
    principal: AuthPrincipal,
    Extension(svc): Extension<Arc<ConcreteFavoriteService>>,
    Json(req_body): Json<FavoriteReq>,
) -> Result<impl IntoResponse, Problem> {
    let view = svc
        .save_favorite(principal.0.email(), req_body.source, req_body.target)
        .await?;
    let location = format!("/favorites/{}", view.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(FavoriteDto::from(view)),
    ))
}

#[tracing::instrument(skip(svc, principal), fields(member.email = %principal.0.email()))]
pub(crate) async fn list_favorites(
    principal: AuthPrincipal,
    Extension(svc): Extension<Arc<ConcreteFavoriteService>>,
) -> Result<Json<Vec<FavoriteDto>>, Problem> {
    let views = svc.find_favorites(principal.0.email()).await?;
    Ok(Json(views.into_iter().map(FavoriteDto::from).collect()))
}

#[tracing::instrument(skip(svc, principal), fields(member.email = %principal.0.email(), favorite.id = %id))]
pub(crate) async fn get_favorite(
    principal: AuthPrincipal,
    Extension(svc): Extension<Arc<ConcreteFavoriteService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<FavoriteDto>, Problem> {
    let view = svc.find_favorite(principal.0.email(), id).await?;
    Ok(Json(FavoriteDto::from(view)))
}

#[tracing::instrument(skip(svc, principal), fields(member.email = %principal.0.email(), favorite.id = %id))]
pub(crate) async fn delete_favorite(
    principal: AuthPrincipal,
    Extension(svc): Extension<Arc<ConcreteFavoriteService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    svc.delete_favorite(principal.0.email(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
