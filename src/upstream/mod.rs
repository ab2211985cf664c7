//! Upstream Provider Clients
//!
//! reqwest clients for the three services this server proxies: the forecast
//! provider, the geocoder and the AI summarizer. Each client validates the
//! provider's payload against our schema; route handlers decide what gets
//! cached and what degrades to null.

mod ai;
mod geocoding;
mod weather;

pub use ai::SummaryClient;
pub use geocoding::GeosearchClient;
pub use weather::ForecastClient;
