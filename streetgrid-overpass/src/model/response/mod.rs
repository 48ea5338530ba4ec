mod overpass_element;
mod overpass_response;
mod way_node;

pub use overpass_element::{OsmNode, OsmWay, OverpassElement};
pub use overpass_response::OverpassResponse;
pub use way_node::{LatLon, WayNode};
