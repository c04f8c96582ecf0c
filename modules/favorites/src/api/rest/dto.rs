use serde::{Deserialize, Serialize};
use uuid::Uuid;

use stations::Station;

use crate::domain::service::FavoriteView;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FavoriteReq {
    pub source: Uuid,
    pub target: Uuid,
}

#[derive(Debug, Serialize)]
pub struct FavoriteDto {
    pub id: Uuid,
    pub source: FavoriteStationDto,
    pub target: FavoriteStationDto,
}

#[derive(Debug, Serialize)]
pub struct FavoriteStationDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Station> for FavoriteStationDto {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
        }
    }
}

impl From<FavoriteView> for FavoriteDto {
    fn from(view: FavoriteView) -> Self {
        Self {
            id: view.id,
            source: view.source.into(),
            target: view.target.into(),
        }
    }
}
