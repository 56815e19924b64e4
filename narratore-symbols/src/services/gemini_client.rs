//! Gemini generative-text client
//!
//! Thin `reqwest` wrapper over the `generateContent` REST endpoint. Callers
//! treat every [`GenerationError`] as "service unavailable" and fall back to
//! static data; this client never retries.

use async_trait::async_trait;
use narratore_common::config::{is_valid_key, GeminiConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("narratore-symbols/", env!("CARGO_PKG_VERSION"));

/// Header carrying the API key; the key never goes into the request URL
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Generative-text client errors
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key not configured")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Empty response")]
    EmptyResponse,
}

/// A collaborator that turns a prompt into free-form text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Collaborator name for logging and health reporting
    fn name(&self) -> &'static str;

    /// Generate a free-form text response for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Gemini API client
pub struct GeminiClient {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let api_key = api_key.into();
        if !is_valid_key(&api_key) {
            return Err(GenerationError::MissingApiKey);
        }

        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            api_key,
            model: model.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build client from bootstrap config and an already-resolved API key
    pub fn from_config(config: &GeminiConfig, api_key: &str) -> Result<Self, GenerationError> {
        Self::new(
            api_key,
            config.model.clone(),
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        tracing::debug!(model = %self.model, prompt_chars = prompt.chars().count(), "Querying Gemini API");

        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .http_client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Network(e.without_url().to_string()))?;

        let status = response.status();

        if status.as_u16() == 429 {
            return Err(GenerationError::RateLimitExceeded);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api(status.as_u16(), error_text));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Parse(e.without_url().to_string()))?;

        parsed.into_text().ok_or(GenerationError::EmptyResponse)
    }
}

/// Decode the first JSON object embedded in a free-form response
///
/// Decoding starts at the first `{`; anything after the first complete value
/// is ignored.
pub fn parse_json_object<T: DeserializeOwned>(response: &str) -> Result<T, GenerationError> {
    let start = response
        .find('{')
        .ok_or_else(|| GenerationError::Parse("no JSON object in response".to_string()))?;

    serde_json::Deserializer::from_str(&response[start..])
        .into_iter::<T>()
        .next()
        .ok_or_else(|| GenerationError::Parse("no JSON object in response".to_string()))?
        .map_err(|e| GenerationError::Parse(e.to_string()))
}
