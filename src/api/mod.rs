//! API Module
//!
//! HTTP handlers, routing and cache-key derivation for the weather lookup
//! REST API.
//!
//! # Endpoints
//! - `POST /api/forecast` - Cached forecast lookup
//! - `POST /api/summary` - Combined forecast, reverse geocode and AI summaries
//! - `GET /api/geosearch` - Free-text place search
//! - `GET /api/geosearch/reverse` - Reverse geocoding
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod keys;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
