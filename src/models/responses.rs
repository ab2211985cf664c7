//! Response DTOs for the weather lookup API
//!
//! Defines the structure of outgoing HTTP response bodies that aren't plain
//! proxied provider payloads.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::{DaySummary, ForecastResponse, ReverseGeosearchPlace, Units};

/// Response body for the combined conditions lookup (POST /api/summary)
///
/// The forecast is mandatory; the AI summaries and the reverse geocode are
/// best-effort and degrade to null when their provider misbehaves.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    /// The validated forecast payload
    pub forecast: ForecastResponse,
    /// One AI-generated summary per forecast day, if the summarizer succeeded
    pub ai_days_summary: Option<Vec<DaySummary>>,
    /// Reverse geocode of the requested coordinates, if the geocoder succeeded
    pub reverse_geosearch: Option<ReverseGeosearchPlace>,
    /// The units the forecast was requested in
    pub units: Units,
}

/// Per-cache statistics snapshot for the stats endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CacheReport {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheReport {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Forecast cache statistics
    pub forecast: CacheReport,
    /// AI summary cache statistics
    pub summary: CacheReport,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
