//! Cache Key Derivation
//!
//! The cache stores treat keys as opaque strings; these helpers are where the
//! call sites derive them. Forecast keys quantize coordinates to three
//! decimals (about 110 m) so nearby lookups share an entry. Summary keys are
//! content-addressed: a digest of the units tag and the serialized daily
//! forecast, so identical inputs reuse the same cached summary no matter
//! which request produced them.

use blake2::{Blake2s256, Digest};

use crate::models::Units;

/// Derives the forecast cache key from rounded coordinates and the units tag.
pub fn forecast_key(lat: f64, lon: f64, units: Units) -> String {
    format!("{:.3},{:.3},{}", lat, lon, units)
}

/// Derives the content-addressed AI summary cache key.
pub fn summary_key(units: Units, daily_json: &str) -> String {
    let mut hasher = Blake2s256::new();
    hasher.update(units.to_string().as_bytes());
    hasher.update(daily_json.as_bytes());
    hex::encode(hasher.finalize())
}
