use crate::model::{
    response::{LatLon, OsmWay, OverpassResponse, WayNode},
    CoordinateOrder, OverpassError,
};
use geo::LineString;
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};
use std::collections::HashMap;

/// builds one LineString feature per `way` element of the response, in
/// response order, with coordinates in the way's node order.
///
/// # Arguments
/// * `response` - decoded overpass response
/// * `coordinate_order` - axis order of the written positions
/// * `include_tags` - copy way tags into properties. when false every
///   feature has an empty property map.
///
/// # Result
/// the collection, or an error if a way references a node missing from the response
pub fn to_feature_collection(
    response: &OverpassResponse,
    coordinate_order: CoordinateOrder,
    include_tags: bool,
) -> Result<FeatureCollection, OverpassError> {
    let node_lookup: HashMap<i64, LatLon> = response
        .nodes()
        .map(|node| (node.id, node.lat_lon()))
        .collect();

    let features = response
        .ways()
        .map(|way| -> Result<Feature, OverpassError> {
            let positions = way_positions(way, &node_lookup)?;
            if positions.len() < 2 {
                log::debug!("way {} has {} node(s)", way.id, positions.len());
            }
            let line: LineString<f64> = positions
                .iter()
                .map(|p| coordinate_order.coord(p))
                .collect();
            let properties = if include_tags {
                way.tags
                    .iter()
                    .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
                    .collect::<JsonObject>()
            } else {
                JsonObject::new()
            };
            Ok(Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::from(&geo::Geometry::LineString(line))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            })
        })
        .collect::<Result<Vec<_>, OverpassError>>()?;

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

/// the ordered positions of a way. inline `geometry` wins when present,
/// otherwise each node entry is used directly or resolved by id.
fn way_positions(
    way: &OsmWay,
    node_lookup: &HashMap<i64, LatLon>,
) -> Result<Vec<LatLon>, OverpassError> {
    if let Some(geometry) = &way.geometry {
        if !geometry.is_empty() {
            return Ok(geometry.clone());
        }
    }
    way.nodes
        .iter()
        .map(|node| match node {
            WayNode::Coordinate(position) => Ok(*position),
            WayNode::Reference(node_id) => {
                node_lookup
                    .get(node_id)
                    .copied()
                    .ok_or(OverpassError::MissingNode {
                        way_id: way.id,
                        node_id: *node_id,
                    })
            }
        })
        .collect()
}
