mod bounding_box;
mod geojson_io_error;

pub use bounding_box::{format_coordinate, BoundingBox};
pub use geojson_io_error::GeoJsonIoError;
