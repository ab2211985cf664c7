//! AI Day Summary Schema

use serde::{Deserialize, Serialize};

// == Day Summary ==
/// One natural-language summary of a forecast day, as produced by the AI
/// summarizer. The model is constrained to return an array of exactly these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Concise, natural-language weather summary for one day
    pub summary: String,
}
