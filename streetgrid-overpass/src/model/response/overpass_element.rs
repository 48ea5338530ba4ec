use super::{LatLon, WayNode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// an entry of the `elements` array of an overpass JSON response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OverpassElement {
    Node(OsmNode),
    Way(OsmWay),
    /// relations, areas and anything else the street download does not use
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmNode {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OsmWay {
    pub id: i64,
    #[serde(default)]
    pub nodes: Vec<WayNode>,
    /// present on `out geom` responses, one entry per node
    #[serde(default)]
    pub geometry: Option<Vec<LatLon>>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

impl OsmNode {
    pub fn lat_lon(&self) -> LatLon {
        LatLon {
            lat: self.lat,
            lon: self.lon,
        }
    }
}
