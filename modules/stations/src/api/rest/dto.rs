use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::model::Station;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateStationReq {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct StationDto {
    pub id: Uuid,
    pub name: String,
}

impl From<Station> for StationDto {
    fn from(station: Station) -> Self {
        Self {
            id: station.id,
            name: station.name,
        }
    }
}
