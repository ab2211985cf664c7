//! Forecast Provider Client
//!
//! Thin reqwest client for the OpenWeatherMap one-call endpoint. The response
//! is validated against the forecast schema here, so callers only ever see
//! (and cache) well-formed payloads.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{ForecastResponse, Units};

const PROVIDER: &str = "forecast";

// == Forecast Client ==
pub struct ForecastClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ForecastClient {
    /// Creates a new client for the configured one-call endpoint.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent(concat!("skycast/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.openweather_base_url.clone(),
            api_key: config.openweather_api_key.clone(),
        }
    }

    /// Fetches the one-call forecast for a coordinate pair.
    ///
    /// A non-2xx status or a payload that doesn't match the forecast schema
    /// maps to [`ApiError::UpstreamUnexpected`], which the API layer turns
    /// into a 424, the same contract the browser already handles.
    pub async fn one_call(&self, lat: f64, lon: f64, units: Units) -> Result<ForecastResponse> {
        debug!("Fetching forecast for {},{} in {} units", lat, lon, units);

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", units.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::UpstreamUnexpected(PROVIDER));
        }

        response
            .json::<ForecastResponse>()
            .await
            .map_err(|_| ApiError::UpstreamUnexpected(PROVIDER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_from_default_config() {
        let client = ForecastClient::new(&Config::default());
        assert!(client.base_url.contains("openweathermap"));
        assert!(client.api_key.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_upstream_error() {
        let config = Config {
            // Nothing listens here; the request fails at connect time
            openweather_base_url: "http://127.0.0.1:1/onecall".to_string(),
            ..Config::default()
        };
        let client = ForecastClient::new(&config);

        let result = client.one_call(52.52, 13.405, Units::Metric).await;
        assert!(matches!(result, Err(ApiError::Upstream(_))));
    }
}
