use crate::model::{query::OverpassQuery, response::OverpassResponse, OverpassError};
use std::str::FromStr;

/// blocking client for an overpass API interpreter endpoint
pub struct OverpassClient {
    endpoint: String,
    client: reqwest::blocking::Client,
}

impl OverpassClient {
    pub fn new(endpoint: &str) -> Result<Self, OverpassError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| OverpassError::HttpClientError { source })?;
        Ok(Self {
            endpoint: String::from(endpoint),
            client,
        })
    }

    /// wraps an already configured HTTP client
    pub fn with_client(endpoint: &str, client: reqwest::blocking::Client) -> Self {
        Self {
            endpoint: String::from(endpoint),
            client,
        }
    }

    /// issues a single GET with the rendered query as the `data` parameter.
    /// any non-success status fails the request; there are no retries.
    pub fn fetch(&self, query: &OverpassQuery) -> Result<OverpassResponse, OverpassError> {
        let data = query.to_string();
        log::debug!("GET {} with query:\n{data}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("data", data.as_str())])
            .send()
            .map_err(|source| OverpassError::RequestError {
                url: self.endpoint.clone(),
                source,
            })?
            .error_for_status()
            .map_err(|source| OverpassError::HttpStatusError { source })?;
        let body = response
            .text()
            .map_err(|source| OverpassError::ResponseBodyError { source })?;
        log::debug!("received {} bytes from overpass", body.len());
        OverpassResponse::from_str(&body)
    }
}
