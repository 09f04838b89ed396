pub mod gemini;
pub mod prompt;

use std::sync::Arc;
use async_trait::async_trait;
use log::{info, warn};
use serde_json::Value;
use thiserror::Error;

pub use gemini::GeminiModel;

/// Relayed when the provider answers without a usable candidate.
pub const EMPTY_CANDIDATE_FALLBACK: &str = "Tina failed to generate a response.";

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Rate limited")]
    RateLimited,

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout
        } else if err.is_decode() {
            ProviderError::Parse(err.to_string())
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

/// A text-generation backend. `Ok(None)` means the provider answered but
/// offered no usable candidate.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Option<Value>, ProviderError>;
}

/// Process-wide handle to the configured generator, shared read-only by all workers.
#[derive(Clone)]
pub struct ModelManager {
    pub model: Arc<dyn TextGenerator>,
}

impl ModelManager {
    pub fn new(model: Arc<dyn TextGenerator>) -> Self {
        Self { model }
    }

    /// Returns the first candidate's content, or the fallback text when there is none.
    pub async fn respond(&self, prompt: &str) -> Result<Value, ProviderError> {
        info!("Generating reply for prompt of {} characters", prompt.len());

        match self.model.generate(prompt).await? {
            Some(content) => Ok(content),
            None => {
                warn!("Provider returned no usable candidate, relaying fallback");
                Ok(Value::String(EMPTY_CANDIDATE_FALLBACK.to_string()))
            }
        }
    }
}
