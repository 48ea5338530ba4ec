mod street_fetch_configuration;

pub use street_fetch_configuration::StreetFetchConfiguration;
pub use street_fetch_configuration::DEFAULT_OVERPASS_URL;
