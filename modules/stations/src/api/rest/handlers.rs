use std::sync::Arc;

use axum::extract::Path;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use http::{StatusCode, header};
use ml_http::Problem;
use uuid::Uuid;

use crate::api::rest::dto::{CreateStationReq, StationDto};
use crate::module::ConcreteStationService;

#[tracing::instrument(skip(svc, req_body), fields(station.name = %req_body.name))]
pub(crate) async fn create_station(
    Extension(svc): Extension<Arc<ConcreteStationService>>,
    Json(req_body): Json<CreateStationReq>,
) -> Result<impl IntoResponse, Problem> {
    let station = svc.create_station(&req_body.name).await?;
    let location = format!("/stations/{}", station.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StationDto::from(station)),
    ))
}

pub(crate) async fn list_stations(
    Extension(svc): Extension<Arc<ConcreteStationService>>,
) -> Result<Json<Vec<StationDto>>, Problem> {
    let stations = svc.list_stations().await?;
    Ok(Json(stations.into_iter().map(StationDto::from).collect()))
}

#[tracing::instrument(skip(svc), fields(station.id = %id))]
pub(crate) async fn get_station(
    Extension(svc): Extension<Arc<ConcreteStationService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<StationDto>, Problem> {
    let station = svc.get_station(id).await?;
    Ok(Json(StationDto::from(station)))
}

#[tracing::instrument(skip(svc), fields(station.id = %id))]
pub(crate) async fn delete_station(
    Extension(svc): Extension<Arc<ConcreteStationService>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, Problem> {
    svc.delete_station(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
