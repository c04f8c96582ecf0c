use std::sync::Arc;

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use http::{StatusCode, header};
use secrecy::ExposeSecret;
use tracing::field::Empty;
use uuid::Uuid;

use ml_auth::{AuthPrincipal, TokenAuthService};
use ml_http::Problem;

use crate::api::rest::dto::{MemberDto, MemberReq, TokenReq, TokenResponse};
use crate::module::ConcreteMemberService;

// ==================== Registration & administration ====================

/// Self-registration; deliberately public, there is no account to act as yet.
#[tracing::instrument(skip(svc, req_body), fields(member.email = %req_body.email))]
pub(crate) async fn create_member(
    Extension(svc): Extension<Arc<ConcreteMemberService>>,
    Json(req_body): Json<MemberReq>,
) -> Result<impl IntoResponse, Problem> {
    let member = svc.create_member(req_body.into()).await?;
    let location = format!("/members/{}", member.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(MemberDto::from(member)),
    ))
}

#[tracing::instrument(skip(svc), fields(member.id = %id))]
pub(crate) async fn get_member(
    Extension(svc): Extension<Arc<ConcreteMemberService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<MemberDto>, Problem> {
    let member = svc.get_member(id).await?;
    Ok(Json(MemberDto::from(member)))
}

#[tracing::instrument(skip(svc, req_body), fields(member.id = %id))]
pub(crate) async fn update_member(
    Extension(svc): Extension<Arc<ConcreteMemberService>>,
    Path(id): Path<Uuid>,
    Json(req_body): Json<MemberReq>,
) -> Result<Json<MemberDto>, Problem> {
    let member = svc.update_member(id, req_body.into()).await?;
    Ok(Json(MemberDto::from(member)))
}

#[tracing::instrument(skip(svc), fields(member.id = %id))]
pub(crate) async fn delete_member(
    Extension(svc): Extension<Arc<ConcreteMemberService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    svc.delete_member(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Self-service (/members/me) ====================

/// The caller is whoever the resolved principal says; handlers never parse
/// credentials themselves.
#[tracing::instrument(skip(svc, principal), fields(member.email = %principal.0.email()))]
pub(crate) async fn get_my_member(
    principal: AuthPrincipal,
    Extension(svc): Extension<Arc<ConcreteMemberService>>,
) -> Result<Json<MemberDto>, Problem> {
    let member = svc.get_member_by_email(principal.0.email()).await?;
    Ok(Json(MemberDto::from(member)))
}

#[tracing::instrument(skip(svc, principal, req_body), fields(member.email = %principal.0.email()))]
pub(crate) async fn update_my_member(
    principal: AuthPrincipal,
    Extension(svc): Extension<Arc<ConcreteMemberService>>,
    Json(req_body): Json<MemberReq>,
) -> Result<Json<MemberDto>, Problem> {
    let member = svc
        .update_member_by_email(principal.0.email(), req_body.into())
        .await?;
    Ok(Json(MemberDto::from(member)))
}

#[tracing::instrument(skip(svc, principal), fields(member.email = %principal.0.email()))]
pub(crate) async fn delete_my_member(
    principal: AuthPrincipal,
    Extension(svc): Extension<Arc<ConcreteMemberService>>,
) -> Result<StatusCode, Problem> {
    svc.delete_member_by_email(principal.0.email()).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ==================== Login ====================

#[tracing::instrument(skip(auth, req_body), fields(login.email = %req_body.email, request_id = Empty))]
pub(crate) async fn login(
    Extension(auth): Extension<Arc<TokenAuthService>>,
    Json(req_body): Json<TokenReq>,
) -> Result<Json<TokenResponse>, ml_auth::AuthError> {
    let access_token = auth
        .login(&req_body.email, req_body.password.expose_secret())
        .await?;
    Ok(Json(TokenResponse { access_token }))
}
