//! AI Summarizer Client
//!
//! Generates one natural-language summary per forecast day via the Gemini
//! `generateContent` API. The model is pinned to JSON output with a response
//! schema, and the returned text is still re-validated before anything
//! reaches the cache or the browser.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{DaySummary, Units};

const PROVIDER: &str = "AI summary";

/// Instructions prepended to the serialized daily forecast data.
const PROMPT: &str = r#"
You are a weather forecaster summarizing a 8-day weather forecast. I will provide JSON data containing daily weather details. Your task is to generate a concise, natural-language weather summary for each day, similar to what a TV weather presenter would say.

### **Instructions:**
- **Output Format:** Return a JSON array with exactly 8 objects, with 'summary' key where value of type string with summary of the weather for one day.
- **Style:** The summaries should be clear, engaging, and informative.
- **Content:**
  - Use the 'summary' field for inspiration.
  - Randomly, include some extra information about sunrise, sunset, moonrise, moonset or moon phase
  - Mention key details such as temperature trends, precipitation, wind conditions, and notable weather events.
  - Avoid excessive numerical details, use general terms like "chilly," "breezy," "warm," or "heavy snowfall."
  - **Randomly include** information about **sunrise, sunset, moonrise, moonset, or moon phase** in some summaries for variety.
  - **Always mention** if it is a full moon ('moon_phase = 0.5').
  - **Always mention** if it is a new moon ('moon_phase = 1') or ('moon_phase = 0').
  - **Never** use 'dt' value as unix timestamp directly in your day summary
  - **Never** use 'sunrise', 'sunset', 'moonrise', 'moonset' value as unix timestamp directly in your day summary
  - **Never** use 'moon_phase' numerical value directly in your day summary
  - If applicable, mention times of day when weather conditions may change (e.g., "Snow showers in the morning, clearing by afternoon").

Provide only the JSON array in your response, with no additional text and no markdown formatting, just pure json.
Forecast data below:
"#;

// == Wire Types ==
#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Schema forcing the model to answer `[{"summary": "..."}]`.
fn response_schema() -> serde_json::Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "summary": {
                    "type": "STRING",
                    "description": "concise, natural-language weather summary",
                    "nullable": false
                }
            },
            "required": ["summary"]
        }
    })
}

// == Summary Client ==
pub struct SummaryClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl SummaryClient {
    /// Creates a new client for the configured generative language endpoint.
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .user_agent(concat!("skycast/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.gemini_base_url.clone(),
            api_key: config.google_ai_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }

    /// Generates day summaries from the serialized daily forecast.
    ///
    /// `daily_json` is the exact string the caller hashed into the cache key,
    /// so identical inputs produce identical prompts.
    pub async fn day_summaries(&self, daily_json: &str, units: Units) -> Result<Vec<DaySummary>> {
        debug!("Requesting AI day summaries ({} bytes of daily data)", daily_json.len());

        let prompt = format!(
            "{}{}.\nIf you want to use units in your summary use {} units.",
            PROMPT, daily_json, units
        );

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema(),
            },
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(ApiError::UpstreamUnexpected(PROVIDER));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|_| ApiError::UpstreamUnexpected(PROVIDER))?;

        let text = body
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.as_str())
            .ok_or(ApiError::UpstreamUnexpected(PROVIDER))?;

        parse_summaries(text)
    }
}

/// Parses the model's JSON text into day summaries.
fn parse_summaries(text: &str) -> Result<Vec<DaySummary>> {
    serde_json::from_str(text).map_err(|_| ApiError::UpstreamUnexpected(PROVIDER))
}
