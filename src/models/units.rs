//! Measurement Units
//!
//! The units tag a forecast is requested in, plus a coordinate-based guess
//! for visitors who don't pick one.

use std::fmt;

use serde::{Deserialize, Serialize};

// == Units ==
/// Measurement system for forecast values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::Imperial => write!(f, "imperial"),
        }
    }
}

// == Units Guess ==
/// Guesses measurement units from coordinates.
///
/// Bounding boxes cover the regions that use imperial units: the contiguous
/// US, Hawaii, the US Virgin Islands, Guam, Myanmar and Liberia. Everywhere
/// else gets metric.
pub fn guess_units(lat: f64, lon: f64) -> Units {
    let is_us = (24.396308..=49.384358).contains(&lat) && (-125.0..=-66.93457).contains(&lon);
    let is_hawaii =
        (18.86546..=28.5175).contains(&lat) && (-178.443593..=-154.755792).contains(&lon);
    let is_virgin_islands =
        (17.623467..=18.412861).contains(&lat) && (-65.159094..=-64.512674).contains(&lon);
    let is_guam =
        (13.234444..=13.654722).contains(&lat) && (144.624167..=144.956389).contains(&lon);
    let is_myanmar = (9.93296..=28.54789).contains(&lat) && (92.18987..=101.17027).contains(&lon);
    let is_liberia = (4.20826..=8.55199).contains(&lat) && (-11.49752..=-7.36732).contains(&lon);

    if is_us || is_hawaii || is_virgin_islands || is_guam || is_myanmar || is_liberia {
        Units::Imperial
    } else {
        Units::Metric
    }
}
