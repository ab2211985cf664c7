//! Skycast - a weather lookup server
//!
//! Proxies a forecast provider, a geocoder and an AI summarizer for a
//! browser front end, memoizing the expensive lookups in typed in-process
//! TTL caches.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweep_task;
