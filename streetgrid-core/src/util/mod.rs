pub mod config_ops;
pub mod geojson_ops;
