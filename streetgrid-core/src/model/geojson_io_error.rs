use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoJsonIoError {
    #[error("unable to load file {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("unable to write file {path}: {source}")]
    WriteError {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to read file {path} as GeoJSON: {source}")]
    InvalidGeoJson {
        path: String,
        source: geojson::Error,
    },
    #[error("GeoJSON must be a FeatureCollection but found single '{found}' in file {path}")]
    NotFeatureCollection { path: String, found: String },
    #[error("failed to decode geometry for feature {0}: {1}")]
    InvalidGeometry(String, geojson::Error),
    #[error("failure encoding GeoJSON: {source}")]
    SerializeError {
        #[from]
        source: serde_json::Error,
    },
}
