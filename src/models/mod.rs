//! Data models for the weather lookup server
//!
//! Request/response DTOs plus the schemas of the three upstream providers
//! (forecast, geocoding, AI summarizer). Provider payloads are validated
//! through these types before they are cached or returned.

pub mod forecast;
pub mod geosearch;
pub mod requests;
pub mod responses;
pub mod summary;
pub mod units;

// Re-export commonly used types
pub use forecast::{ForecastDaily, ForecastResponse};
pub use geosearch::{GeosearchPlace, ReverseGeosearchPlace};
pub use requests::{
    ForecastRequest, GeosearchQuery, ReverseGeosearchQuery, SummaryRequest, validate_coordinates,
};
pub use responses::{CacheReport, HealthResponse, StatsResponse, SummaryResponse};
pub use summary::DaySummary;
pub use units::{guess_units, Units};
