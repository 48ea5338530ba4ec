use streetgrid_core::model::GeoJsonIoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverpassError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid user input: {0}")]
    InvalidUserInput(String),
    #[error("failure building HTTP client: {source}")]
    HttpClientError { source: reqwest::Error },
    #[error("GET request to {url} failed: {source}")]
    RequestError { url: String, source: reqwest::Error },
    #[error("overpass API returned an error status: {source}")]
    HttpStatusError { source: reqwest::Error },
    #[error("failure reading overpass API response body: {source}")]
    ResponseBodyError { source: reqwest::Error },
    #[error("failure decoding overpass API response: {source}")]
    InvalidResponse { source: serde_json::Error },
    #[error("way '{way_id}' references node '{node_id}' which is not in the response")]
    MissingNode { way_id: i64, node_id: i64 },
    #[error(transparent)]
    GeoJsonIoError {
        #[from]
        source: GeoJsonIoError,
    },
    #[error("failure reading from or writing to the terminal: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
}
