use super::{FilterQuery, SpatialFilter};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use streetgrid_core::model::BoundingBox;

/// a single `way` statement in the Overpass API Language described at
/// <https://wiki.openstreetmap.org/wiki/Overpass_API/Language_Guide>,
/// rendered as Overpass QL with JSON output via [`Display`].
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct OverpassQuery {
    pub filters: Vec<FilterQuery>,
    pub spatial_filter: SpatialFilter,
    pub bbox: BoundingBox,
    /// also return the nodes referenced by matched ways (`>; out skel qt;`)
    pub recurse_down: bool,
}

impl OverpassQuery {
    /// all ways carrying any `highway` tag within the bounding box
    pub fn highways(bbox: BoundingBox, spatial_filter: SpatialFilter, recurse_down: bool) -> Self {
        Self {
            filters: vec![FilterQuery::exists("highway")],
            spatial_filter,
            bbox,
            recurse_down,
        }
    }
}

impl Display for OverpassQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let filters = self.filters.iter().join("");
        let spatial = self.spatial_filter.render(&self.bbox);
        writeln!(f, "[out:json];")?;
        writeln!(f, "(")?;
        writeln!(f, "  way{filters}{spatial};")?;
        writeln!(f, ");")?;
        write!(f, "out body;")?;
        if self.recurse_down {
            write!(f, "\n>;\nout skel qt;")?;
        }
        Ok(())
    }
}
