use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// an entry of a way's `nodes` list. `out body` responses list node ids,
/// which are resolved against the `node` elements of the same response.
/// inline coordinates are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WayNode {
    Reference(i64),
    Coordinate(LatLon),
}
