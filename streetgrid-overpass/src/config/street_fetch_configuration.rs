use crate::model::{query::SpatialFilter, CoordinateOrder, OverpassError};
use serde::{Deserialize, Serialize};
use streetgrid_core::util::config_ops;

pub const DEFAULT_OVERPASS_URL: &str = "http://overpass-api.de/api/interpreter";

/// defines behaviors for a street download
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct StreetFetchConfiguration {
    /// overpass API interpreter endpoint
    pub endpoint: String,
    pub spatial_filter: SpatialFilter,
    /// request the nodes referenced by each way so node ids can be resolved
    pub recurse_down: bool,
    pub coordinate_order: CoordinateOrder,
    /// copy OSM way tags into feature properties instead of leaving them empty
    pub include_tags: bool,
    /// directory receiving the bbox_streets_*.geojson file
    pub output_directory: String,
}

impl Default for StreetFetchConfiguration {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_OVERPASS_URL),
            spatial_filter: SpatialFilter::default(),
            recurse_down: true,
            coordinate_order: CoordinateOrder::default(),
            include_tags: false,
            output_directory: String::from("."),
        }
    }
}

impl TryFrom<&String> for StreetFetchConfiguration {
    type Error = OverpassError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        config_ops::read_configuration_file(f).map_err(OverpassError::ConfigurationError)
    }
}
