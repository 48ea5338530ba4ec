use crate::model::response::LatLon;
use geo::{coord, Coord};
use serde::{Deserialize, Serialize};

/// axis order of positions written to the street GeoJSON.
///
/// GeoJSON positions are `[longitude, latitude]`. `LatLon`, the default,
/// writes `[latitude, longitude]` and is not standard GeoJSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateOrder {
    #[default]
    LatLon,
    LonLat,
}

impl CoordinateOrder {
    pub fn coord(&self, position: &LatLon) -> Coord<f64> {
        match self {
            CoordinateOrder::LatLon => coord! { x: position.lat, y: position.lon },
            CoordinateOrder::LonLat => coord! { x: position.lon, y: position.lat },
        }
    }
}
