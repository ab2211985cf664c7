//! Geocoding Provider Client
//!
//! Nominatim search and reverse lookups. Nominatim's usage policy requires a
//! descriptive User-Agent, so the client always sends one.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{GeosearchPlace, ReverseGeosearchPlace};

const SEARCH_PROVIDER: &str = "geosearch";
const REVERSE_PROVIDER: &str = "reverse geosearch";

// == Geosearch Client ==
pub struct GeosearchClient {
    client: Client,
    base_url: String,
}

impl GeosearchClient {
    /// Creates a new client for the configured Nominatim instance.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent(concat!("skycast/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.nominatim_base_url.clone(),
        }
    }

    /// Free-text place search, capped at 10 results.
    pub async fn search(&self, query: &str) -> Result<Vec<GeosearchPlace>> {
        debug!("Geosearch for {:?}", query);

        let url = format!("{}/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("limit", "10"), ("format", "jsonv2")])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::UpstreamUnexpected(SEARCH_PROVIDER));
        }

        response
            .json::<Vec<GeosearchPlace>>()
            .await
            .map_err(|_| ApiError::UpstreamUnexpected(SEARCH_PROVIDER))
    }

    /// Reverse lookup of the place at a coordinate pair.
    pub async fn reverse(&self, lat: f64, lon: f64) -> Result<ReverseGeosearchPlace> {
        debug!("Reverse geosearch for {},{}", lat, lon);

        let url = format!("{}/reverse", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("zoom", "18".to_string()),
                ("addressdetails", "0".to_string()),
                ("format", "jsonv2".to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::UpstreamUnexpected(REVERSE_PROVIDER));
        }

        response
            .json::<ReverseGeosearchPlace>()
            .await
            .map_err(|_| ApiError::UpstreamUnexpected(REVERSE_PROVIDER))
    }
}
