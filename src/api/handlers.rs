//! API Handlers
//!
//! HTTP request handlers for each endpoint. The forecast and AI summary
//! paths are read-through memoizers: check the cache, on a miss do the
//! expensive upstream call, and store only confirmed-successful results.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::api::keys;
use crate::cache::{Ttl, TtlCache};
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{
    guess_units, DaySummary, ForecastRequest, ForecastResponse, GeosearchQuery, HealthResponse,
    ReverseGeosearchQuery, StatsResponse, SummaryRequest, SummaryResponse, Units,
};
use crate::upstream::{ForecastClient, GeosearchClient, SummaryClient};

/// Responses proxied from the geocoder may be cached by browsers and
/// intermediaries for an hour.
const GEOSEARCH_CACHE_CONTROL: &str = "public, max-age=3600";

// == App State ==
/// Application state shared across all handlers.
///
/// Both caches are constructed once at startup and injected here; handlers
/// never reach for global state. Each cache is typed for its single call
/// site. The write locks are held only for the in-memory get/set, never
/// across an upstream await.
#[derive(Clone)]
pub struct AppState {
    /// Forecast responses keyed by rounded coordinates and units
    pub forecast_cache: Arc<RwLock<TtlCache<ForecastResponse>>>,
    /// AI day summaries keyed by content digest
    pub summary_cache: Arc<RwLock<TtlCache<Vec<DaySummary>>>>,
    /// Forecast provider client
    pub weather: Arc<ForecastClient>,
    /// Geocoding client
    pub geocoder: Arc<GeosearchClient>,
    /// AI summarizer client
    pub ai: Arc<SummaryClient>,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            forecast_cache: Arc::new(RwLock::new(TtlCache::new(Some(config.default_ttl)))),
            summary_cache: Arc::new(RwLock::new(TtlCache::new(Some(config.default_ttl)))),
            weather: Arc::new(ForecastClient::new(config)),
            geocoder: Arc::new(GeosearchClient::new(config)),
            ai: Arc::new(SummaryClient::new(config)),
            config: Arc::new(config.clone()),
        }
    }
}

// == Forecast ==
/// Handler for POST /api/forecast
///
/// Validates the coordinates, then serves the forecast through the cache.
pub async fn forecast_handler(
    State(state): State<AppState>,
    Json(req): Json<ForecastRequest>,
) -> Result<Json<ForecastResponse>> {
    let errors = req.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let forecast = fetch_forecast(&state, req.lat, req.lon, req.units).await?;
    Ok(Json(forecast))
}

/// Read-through forecast lookup shared by the forecast and summary endpoints.
///
/// On a miss the upstream response is schema-validated by the client before
/// it is cached, so an upstream failure or malformed payload never occupies
/// the key.
async fn fetch_forecast(
    state: &AppState,
    lat: f64,
    lon: f64,
    units: Units,
) -> Result<ForecastResponse> {
    let key = keys::forecast_key(lat, lon, units);

    if let Some(hit) = state.forecast_cache.write().await.get(&key) {
        debug!("Forecast cache hit for {}", key);
        return Ok(hit);
    }

    let forecast = state.weather.one_call(lat, lon, units).await?;

    state.forecast_cache.write().await.set(
        key,
        forecast.clone(),
        Ttl::Seconds(state.config.forecast_ttl),
    )?;

    Ok(forecast)
}

// == Summary ==
/// Handler for POST /api/summary
///
/// The combined lookup backing a location page: forecast plus reverse
/// geocode plus AI day summaries. Only the forecast is load-bearing; the
/// other two degrade to null when their provider misbehaves.
pub async fn summary_handler(
    State(state): State<AppState>,
    Json(req): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>> {
    let errors = req.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let units = req.units.unwrap_or_else(|| guess_units(req.lat, req.lon));

    let (forecast, reverse) = tokio::join!(
        fetch_forecast(&state, req.lat, req.lon, units),
        state.geocoder.reverse(req.lat, req.lon),
    );

    let forecast = forecast?;

    let reverse_geosearch = match reverse {
        Ok(place) => Some(place),
        Err(err) => {
            warn!("Error fetching reverse geosearch: {}", err);
            None
        }
    };

    let ai_days_summary = fetch_day_summaries(&state, &forecast, units).await;

    Ok(Json(SummaryResponse {
        forecast,
        ai_days_summary,
        reverse_geosearch,
        units,
    }))
}

/// Read-through AI summary lookup, content-addressed by the daily forecast.
///
/// A failed or unparseable AI response is returned as None and never cached;
/// caching it would pin the failure for the whole TTL window.
async fn fetch_day_summaries(
    state: &AppState,
    forecast: &ForecastResponse,
    units: Units,
) -> Option<Vec<DaySummary>> {
    let daily_json = match serde_json::to_string(&forecast.daily) {
        Ok(json) => json,
        Err(err) => {
            warn!("Failed to serialize daily forecast: {}", err);
            return None;
        }
    };

    let key = keys::summary_key(units, &daily_json);

    if let Some(hit) = state.summary_cache.write().await.get(&key) {
        debug!("Summary cache hit for {}", key);
        return Some(hit);
    }

    match state.ai.day_summaries(&daily_json, units).await {
        Ok(summaries) => {
            if let Err(err) = state.summary_cache.write().await.set(
                key,
                summaries.clone(),
                Ttl::Seconds(state.config.summary_ttl),
            ) {
                warn!("Failed to cache AI day summaries: {}", err);
            }
            Some(summaries)
        }
        Err(err) => {
            warn!("Error fetching AI day summaries: {}", err);
            None
        }
    }
}

// == Geosearch ==
/// Handler for GET /api/geosearch
///
/// Proxies free-text place search. Results change rarely, so the response
/// carries a public cache-control header instead of using the in-process cache.
pub async fn geosearch_handler(
    State(state): State<AppState>,
    Query(query): Query<GeosearchQuery>,
) -> Result<impl IntoResponse> {
    let errors = query.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    let places = state.geocoder.search(&query.q).await?;

    Ok((
        [(header::CACHE_CONTROL, GEOSEARCH_CACHE_CONTROL)],
        Json(places),
    ))
}

/// Handler for GET /api/geosearch/reverse
pub async fn reverse_geosearch_handler(
    State(state): State<AppState>,
    Query(query): Query<ReverseGeosearchQuery>,
) -> Result<impl IntoResponse> {
    let errors = query.validate();
    if !errors.is_empty() {
        return Err(ApiError::Validation(errors));
    }

    // Validation guarantees both coordinates are present
    let place = state
        .geocoder
        .reverse(query.lat.unwrap_or_default(), query.lon.unwrap_or_default())
        .await?;

    Ok((
        [(header::CACHE_CONTROL, GEOSEARCH_CACHE_CONTROL)],
        Json(place),
    ))
}

// == Stats ==
/// Handler for GET /stats
///
/// Returns hit/miss statistics for both caches.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let forecast = state.forecast_cache.read().await.stats();
    let summary = state.summary_cache.read().await.stats();

    Json(StatsResponse {
        forecast: forecast.into(),
        summary: summary.into(),
    })
}

// == Health ==
/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
