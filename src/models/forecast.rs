//! Forecast Provider Schema
//!
//! Shape of the OpenWeatherMap one-call response. Responses are deserialized
//! through these types before anything is cached or returned to the browser,
//! so a malformed provider payload is rejected instead of poisoning the cache.

use serde::{Deserialize, Serialize};

// == Weather Condition ==
/// One entry of the `weather` array: condition id, group, description, icon code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub id: i64,
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// Precipitation volume for the last hour, as nested by the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Precipitation {
    #[serde(rename = "1h")]
    pub one_hour: f64,
}

// == Current Conditions ==
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastCurrent {
    pub dt: i64,
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub dew_point: f64,
    pub uvi: f64,
    pub clouds: f64,
    pub wind_speed: f64,
    pub wind_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain: Option<Precipitation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snow: Option<Precipitation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunrise: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sunset: Option<i64>,
    pub weather: Vec<WeatherCondition>,
}

// == Minutely Precipitation ==
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastMinutely {
    pub dt: i64,
    pub precipitation: f64,
}

// == Hourly Forecast ==
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastHourly {
    pub dt: i64,
    pub temp: f64,
    pub feels_like: f64,
    pub pressure: f64,
    pub humidity: f64,
    pub dew_point: f64,
    pub uvi: f64,
    pub clouds: f64,
    pub wind_speed: f64,
    pub wind_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain: Option<Precipitation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snow: Option<Precipitation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,
    pub pop: f64,
    pub weather: Vec<WeatherCondition>,
}

/// Temperatures across the day for a daily forecast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyTemp {
    pub morn: f64,
    pub day: f64,
    pub eve: f64,
    pub night: f64,
    pub min: f64,
    pub max: f64,
}

/// Feels-like temperatures across the day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFeelsLike {
    pub morn: f64,
    pub day: f64,
    pub eve: f64,
    pub night: f64,
}

// == Daily Forecast ==
/// One day of the daily forecast. The serialized form of the `daily` array is
/// also the input hashed into the AI summary cache key, so identical daily
/// data always maps to the same summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDaily {
    pub dt: i64,
    pub sunrise: i64,
    pub sunset: i64,
    pub moonrise: i64,
    pub moonset: i64,
    pub moon_phase: f64,
    pub temp: DailyTemp,
    pub feels_like: DailyFeelsLike,
    pub pressure: f64,
    pub humidity: f64,
    pub dew_point: f64,
    pub uvi: f64,
    pub clouds: f64,
    pub wind_speed: f64,
    pub wind_deg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<f64>,
    pub pop: f64,
    pub weather: Vec<WeatherCondition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rain: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snow: Option<f64>,
}

// == Weather Alert ==
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastAlert {
    pub sender_name: String,
    pub event: String,
    pub start: i64,
    pub end: i64,
    pub description: String,
    pub tags: Vec<String>,
}

// == Forecast Response ==
/// The full one-call payload proxied back to the browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub lat: f64,
    pub lon: f64,
    pub timezone: String,
    pub timezone_offset: i64,
    pub current: ForecastCurrent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutely: Option<Vec<ForecastMinutely>>,
    pub hourly: Vec<ForecastHourly>,
    pub daily: Vec<ForecastDaily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerts: Option<Vec<ForecastAlert>>,
}
