//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// The two API keys have no defaults; lookups against the real providers fail
/// without them.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds applied to cache writes that don't pick their own
    pub default_ttl: u64,
    /// Background sweep task interval in seconds
    pub sweep_interval: u64,
    /// TTL in seconds for cached forecast responses
    pub forecast_ttl: u64,
    /// TTL in seconds for cached AI day summaries
    pub summary_ttl: u64,
    /// OpenWeatherMap API key
    pub openweather_api_key: String,
    /// OpenWeatherMap one-call endpoint
    pub openweather_base_url: String,
    /// Google AI API key
    pub google_ai_api_key: String,
    /// Google generative language API base URL
    pub gemini_base_url: String,
    /// Gemini model used for day summaries
    pub gemini_model: String,
    /// Nominatim geocoding base URL
    pub nominatim_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_TTL` - Default cache TTL in seconds (default: 60)
    /// - `SWEEP_INTERVAL` - Sweep cadence in seconds (default: 600)
    /// - `FORECAST_TTL` - Forecast cache TTL in seconds (default: 300)
    /// - `SUMMARY_TTL` - AI summary cache TTL in seconds (default: 300)
    /// - `OPENWEATHERMAP_APPID` - OpenWeatherMap API key
    /// - `OPENWEATHERMAP_BASE_URL` - Forecast endpoint override
    /// - `GOOGLE_AI_API_KEY` - Google AI API key
    /// - `GEMINI_BASE_URL` - Generative language endpoint override
    /// - `GEMINI_MODEL` - Model name (default: gemini-1.5-flash)
    /// - `NOMINATIM_BASE_URL` - Geocoder endpoint override
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            default_ttl: env::var("DEFAULT_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.default_ttl),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                // A zero interval would turn the sweep loop into a busy loop
                .filter(|secs| *secs > 0)
                .unwrap_or(defaults.sweep_interval),
            forecast_ttl: env::var("FORECAST_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.forecast_ttl),
            summary_ttl: env::var("SUMMARY_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.summary_ttl),
            openweather_api_key: env::var("OPENWEATHERMAP_APPID").unwrap_or_default(),
            openweather_base_url: env::var("OPENWEATHERMAP_BASE_URL")
                .unwrap_or(defaults.openweather_base_url),
            google_ai_api_key: env::var("GOOGLE_AI_API_KEY").unwrap_or_default(),
            gemini_base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.gemini_base_url),
            gemini_model: env::var("GEMINI_MODEL").unwrap_or(defaults.gemini_model),
            nominatim_base_url: env::var("NOMINATIM_BASE_URL")
                .unwrap_or(defaults.nominatim_base_url),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_ttl: 60,
            sweep_interval: 600,
            forecast_ttl: 300,
            summary_ttl: 300,
            openweather_api_key: String::new(),
            openweather_base_url: "https://api.openweathermap.org/data/3.0/onecall".to_string(),
            google_ai_api_key: String::new(),
            gemini_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            gemini_model: "gemini-1.5-flash".to_string(),
            nominatim_base_url: "https://nominatim.openstreetmap.org".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.default_ttl, 60);
        assert_eq!(config.sweep_interval, 600);
        assert_eq!(config.forecast_ttl, 300);
        assert_eq!(config.summary_ttl, 300);
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("SERVER_PORT");
        env::remove_var("DEFAULT_TTL");
        env::remove_var("SWEEP_INTERVAL");
        env::remove_var("FORECAST_TTL");
        env::remove_var("SUMMARY_TTL");

        let config = Config::from_env();
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.default_ttl, 60);
        assert_eq!(config.sweep_interval, 600);
        assert_eq!(config.forecast_ttl, 300);
        assert_eq!(config.summary_ttl, 300);
    }

    #[test]
    fn test_config_rejects_zero_sweep_interval() {
        env::set_var("SWEEP_INTERVAL", "0");

        let config = Config::from_env();
        assert_eq!(config.sweep_interval, 600);

        env::remove_var("SWEEP_INTERVAL");
    }
}
