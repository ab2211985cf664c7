//! Geocoding Provider Schema
//!
//! Shape of Nominatim `jsonv2` search and reverse responses. Nominatim sends
//! coordinates back as strings; they are proxied through unchanged.

use serde::{Deserialize, Serialize};

// == Geosearch Place ==
/// One result of a free-text place search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeosearchPlace {
    pub place_id: i64,
    pub licence: String,
    pub osm_type: String,
    pub osm_id: i64,
    pub boundingbox: Vec<String>,
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub place_type: String,
    pub importance: f64,
    pub place_rank: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

// == Reverse Geosearch Place ==
/// The single result of a reverse lookup; extends the search shape with the
/// address type and a possibly-null place name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReverseGeosearchPlace {
    pub place_id: i64,
    pub licence: String,
    pub osm_type: String,
    pub osm_id: i64,
    pub boundingbox: Vec<String>,
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub place_type: String,
    pub importance: f64,
    pub place_rank: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub addresstype: String,
    pub name: Option<String>,
}
