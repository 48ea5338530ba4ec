use streetgrid_core::model::GeoJsonIoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CropError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid crop extent: {0}")]
    InvalidBoundingBox(String),
    #[error(transparent)]
    GeoJsonIoError {
        #[from]
        source: GeoJsonIoError,
    },
}
