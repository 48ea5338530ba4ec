use serde::{Deserialize, Serialize};
use streetgrid_core::model::{format_coordinate as c, BoundingBox};

/// how a bounding box restricts an overpass statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpatialFilter {
    /// `(around:{lat_max},{lon_max},{lat_min},{lon_min})`. overpass reads the
    /// first number as a radius in meters followed by a coordinate list, so
    /// this selects ways near that list rather than inside the box.
    #[default]
    Around,
    /// the standard `(south,west,north,east)` bounding box filter
    Bbox,
}

impl SpatialFilter {
    pub fn render(&self, bbox: &BoundingBox) -> String {
        match self {
            SpatialFilter::Around => format!(
                "(around:{},{},{},{})",
                c(bbox.lat_max()),
                c(bbox.lon_max()),
                c(bbox.lat_min()),
                c(bbox.lon_min())
            ),
            SpatialFilter::Bbox => format!(
                "({},{},{},{})",
                c(bbox.lat_min()),
                c(bbox.lon_min()),
                c(bbox.lat_max()),
                c(bbox.lon_max())
            ),
        }
    }
}
