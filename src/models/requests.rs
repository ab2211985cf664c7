//! Request DTOs for the weather lookup API
//!
//! Defines the structure of incoming HTTP request bodies and query strings,
//! with per-field validation mirrored in the error responses.

use serde::Deserialize;

use crate::error::FieldError;
use crate::models::Units;

// == Coordinate Validation ==
/// Validates a latitude/longitude pair, collecting one error per bad field.
///
/// Range checks also reject NaN, which can't satisfy either bound.
pub fn validate_coordinates(lat: f64, lon: f64) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !(-90.0..=90.0).contains(&lat) {
        errors.push(FieldError::new(
            "lat",
            "Latitude must be between -90 and 90 degrees",
        ));
    }
    if !(-180.0..=180.0).contains(&lon) {
        errors.push(FieldError::new(
            "lon",
            "Longitude must be between -180 and 180 degrees",
        ));
    }
    errors
}

/// Request body for the forecast lookup (POST /api/forecast)
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastRequest {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Measurement units for the forecast
    pub units: Units,
}

impl ForecastRequest {
    /// Validates the request data, returning one error per offending field.
    pub fn validate(&self) -> Vec<FieldError> {
        validate_coordinates(self.lat, self.lon)
    }
}

/// Request body for the combined conditions lookup (POST /api/summary)
#[derive(Debug, Clone, Deserialize)]
pub struct SummaryRequest {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Measurement units; guessed from the coordinates when omitted
    #[serde(default)]
    pub units: Option<Units>,
}

impl SummaryRequest {
    /// Validates the request data, returning one error per offending field.
    pub fn validate(&self) -> Vec<FieldError> {
        validate_coordinates(self.lat, self.lon)
    }
}

/// Query string for place search (GET /api/geosearch)
#[derive(Debug, Clone, Deserialize)]
pub struct GeosearchQuery {
    /// Free-text place query
    #[serde(default)]
    pub q: String,
}

impl GeosearchQuery {
    /// Validates the query, returning one error per offending field.
    pub fn validate(&self) -> Vec<FieldError> {
        if self.q.is_empty() || self.q.chars().count() > 255 {
            vec![FieldError::new(
                "q",
                "Query must be between 1 and 255 characters",
            )]
        } else {
            Vec::new()
        }
    }
}

/// Query string for reverse geocoding (GET /api/geosearch/reverse)
#[derive(Debug, Clone, Deserialize)]
pub struct ReverseGeosearchQuery {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl ReverseGeosearchQuery {
    /// Validates the query, treating missing coordinates like out-of-range ones.
    pub fn validate(&self) -> Vec<FieldError> {
        validate_coordinates(
            self.lat.unwrap_or(f64::NAN),
            self.lon.unwrap_or(f64::NAN),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_request_deserialize() {
        let json = r#"{"lat": 52.52, "lon": 13.405, "units": "metric"}"#;
        let req: ForecastRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.lat, 52.52);
        assert_eq!(req.units, Units::Metric);
        assert!(req.validate().is_empty());
    }

    #[test]
    fn test_forecast_request_bad_units() {
        let json = r#"{"lat": 52.52, "lon": 13.405, "units": "kelvin"}"#;
        assert!(serde_json::from_str::<ForecastRequest>(json).is_err());
    }

    #[test]
    fn test_forecast_request_out_of_range() {
        let req = ForecastRequest {
            lat: 91.0,
            lon: -200.0,
            units: Units::Metric,
        };
        let errors = req.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "lat");
        assert_eq!(errors[1].field, "lon");
    }

    #[test]
    fn test_summary_request_units_optional() {
        let json = r#"{"lat": 39.7392, "lon": -104.9903}"#;
        let req: SummaryRequest = serde_json::from_str(json).unwrap();
        assert!(req.units.is_none());
        assert!(req.validate().is_empty());
    }

    #[test]
    fn test_geosearch_query_bounds() {
        assert!(GeosearchQuery { q: "Berlin".to_string() }.validate().is_empty());
        assert!(!GeosearchQuery { q: String::new() }.validate().is_empty());
        assert!(!GeosearchQuery { q: "x".repeat(256) }.validate().is_empty());
    }

    #[test]
    fn test_reverse_query_missing_params() {
        let query = ReverseGeosearchQuery { lat: None, lon: None };
        assert_eq!(query.validate().len(), 2);
    }

    #[test]
    fn test_reverse_query_valid() {
        let query = ReverseGeosearchQuery {
            lat: Some(52.52),
            lon: Some(13.405),
        };
        assert!(query.validate().is_empty());
    }
}
