//! Blocking client for the Gemini `generateContent` endpoint.

use std::time::Duration;

use serde_json::{json, Value};
use tracing::debug;

use crate::{Advisor, AdvisorError};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Connection settings for [`GeminiAdvisor`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeminiConfig {
    /// API key; required before a request can be made.
    pub api_key: Option<String>,
    /// Model name, e.g. "gemini-2.5-flash".
    pub model: String,
    /// Base URL up to and excluding `/models`.
    pub endpoint: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 60,
        }
    }
}

impl GeminiConfig {
    /// Defaults overridden by `GEMINI_API_KEY`, `GEMINI_MODEL` and
    /// `GEMINI_ENDPOINT` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            config.api_key = Some(key);
        }
        if let Ok(model) = std::env::var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Ok(endpoint) = std::env::var("GEMINI_ENDPOINT") {
            config.endpoint = endpoint;
        }
        config
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Full `generateContent` URL for the configured model.
    pub fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

/// [`Advisor`] backed by the Gemini REST API.
pub struct GeminiAdvisor {
    config: GeminiConfig,
    api_key: String,
    client: reqwest::blocking::Client,
}

impl GeminiAdvisor {
    /// Build a client. Fails with [`AdvisorError::MissingCredential`] when no
    /// non-blank API key is configured.
    pub fn new(config: GeminiConfig) -> Result<Self, AdvisorError> {
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or(AdvisorError::MissingCredential)?
            .to_string();
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AdvisorError::Transport(e.to_string()))?;
        Ok(Self {
            config,
            api_key,
            client,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }
}

impl Advisor for GeminiAdvisor {
    fn advise(&self, prompt: &str) -> Result<String, AdvisorError> {
        let url = self.config.url();
        debug!(%url, model = %self.config.model, "calling advisory service");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(prompt))
            .send()
            .map_err(|e| AdvisorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_default();
            return Err(AdvisorError::Service {
                status: status.as_u16(),
                message,
            });
        }
        let body: Value = response
            .json()
            .map_err(|e| AdvisorError::Decode(e.to_string()))?;
        extract_text(&body)
    }
}

/// JSON body for a single-turn text prompt.
pub fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [
            { "parts": [ { "text": prompt } ] }
        ]
    })
}

/// Concatenate the text parts of the first candidate.
///
/// A response without candidates (e.g. blocked by safety filters) yields
/// [`AdvisorError::EmptyResponse`].
pub fn extract_text(body: &Value) -> Result<String, AdvisorError> {
    let candidates = body
        .get("candidates")
        .and_then(Value::as_array)
        .ok_or(AdvisorError::EmptyResponse)?;
    let first = candidates.first().ok_or(AdvisorError::EmptyResponse)?;
    let parts = first["content"]["parts"]
        .as_array()
        .ok_or_else(|| AdvisorError::Decode("candidate has no content parts".to_string()))?;
    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(Value::as_str))
        .collect();
    if text.trim().is_empty() {
        return Err(AdvisorError::EmptyResponse);
    }
    Ok(text)
}
