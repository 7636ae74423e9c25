use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::{
    core::generation::{Generation, GenerationClient},
    error::{PlannerError, Result},
    parser::FieldLabels,
    services::prompt::{build_itinerary_prompt, TripRequest},
    types::GroundingChunk,
};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Client for the Gemini `generateContent` endpoint with search grounding enabled.
#[derive(Clone, Debug)]
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    model: String,
    timeout: Option<Duration>,
    labels: FieldLabels,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
            labels: FieldLabels::default(),
        }
    }

    /// Build a client from `GEMINI_API_KEY` (or `API_KEY`), honouring
    /// `GEMINI_BASE_URL` and `GEMINI_MODEL` when set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| {
                PlannerError::Config(
                    "GEMINI_API_KEY environment variable must be set before creating a client"
                        .to_string(),
                )
            })?;

        let mut client = Self::new(api_key);
        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            client = client.with_base_url(base_url);
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            client = client.with_model(model);
        }
        Ok(client)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Per-request HTTP timeout. Unset by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Labels the prompt asks the model to use; must match the parser's.
    pub fn with_labels(mut self, labels: FieldLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(&self, prompt: &str) -> Result<GenerateContentResponse> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| PlannerError::Unknown(format!("Failed to build HTTP client: {err}")))?;

        let request_url = build_generate_url(&self.base_url, &self.model);
        let body = build_request_body(prompt);

        let response = client
            .post(&request_url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    PlannerError::Timeout(format!("request to {} timed out", self.model))
                } else {
                    PlannerError::Generation(format!("HTTP request failed: {err}"))
                }
            })?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|err| PlannerError::Generation(format!("Failed to read response: {err}")))?;
        debug!(%status, bytes = response_text.len(), "gemini response received");

        if !status.is_success() {
            let api_message = serde_json::from_str::<Value>(&response_text)
                .ok()
                .and_then(|value| {
                    value
                        .get("error")
                        .and_then(|error| error.get("message"))
                        .and_then(|message| message.as_str())
                        .map(|s| s.to_string())
                })
                .unwrap_or(response_text);

            return Err(PlannerError::Generation(format!(
                "HTTP {} error: {}",
                status, api_message
            )));
        }

        decode_response(&response_text)
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    async fn generate(&self, request: &TripRequest) -> Result<Generation> {
        let prompt = build_itinerary_prompt(request, &self.labels);
        info!(
            model = %self.model,
            destination = request.destination(),
            days = request.duration_days(),
            "requesting itinerary"
        );

        let response = self.generate_content(&prompt).await?;
        Ok(response.into_generation())
    }
}

fn build_generate_url(base_url: &str, model: &str) -> String {
    let trimmed = base_url.trim_end_matches('/');
    format!("{}/models/{}:generateContent", trimmed, model)
}

fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt }] }],
        "tools": [{ "google_search": {} }],
    })
}

fn decode_response(raw: &str) -> Result<GenerateContentResponse> {
    let mut deserializer = serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let location = if path.is_empty() || path == "." {
            "<root>".to_string()
        } else {
            path
        };
        PlannerError::Generation(format!(
            "malformed provider response at {}: {}",
            location,
            err.inner()
        ))
    })
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

impl GenerateContentResponse {
    /// Only the first candidate is used; a response without one yields empty text.
    fn into_generation(self) -> Generation {
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Generation::default();
        };

        let raw_text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let citations = candidate
            .grounding_metadata
            .map(|metadata| metadata.grounding_chunks)
            .unwrap_or_default();

        Generation {
            raw_text,
            citations,
        }
    }
}
