use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::Config;
use super::{ProviderError, TextGenerator};

const API_KEY_HEADER: &str = "x-goog-api-key";

// A wrapper for the Gemini generateContent API
pub struct GeminiModel {
    api_base: String,
    model: String,
    api_key: String,
    generation_config: Option<GenerationConfig>,
    client: Client,
}

impl GeminiModel {
    pub fn new(config: &Config) -> Result<Self> {
        info!("Initializing Gemini client for model {}", config.model);

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let generation_config = GenerationConfig {
            temperature: config.temperature,
            top_p: config.top_p,
            max_output_tokens: config.max_tokens,
        };

        Ok(Self {
            api_base: config.api_base.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            generation_config: (!generation_config.is_empty()).then_some(generation_config),
            client,
        })
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }
}

#[async_trait]
impl TextGenerator for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<Option<Value>, ProviderError> {
        let payload = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: self.generation_config.as_ref(),
        };

        info!("Sending request to Gemini model {}", self.model);
        debug!("Prompt: {}", prompt);

        let response = self
            .client
            .post(self.url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        debug!("Response: {:?}", body);

        Ok(body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<&'a GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    role: &'a str,
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

impl GenerationConfig {
    fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.top_p.is_none() && self.max_output_tokens.is_none()
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    // Relayed verbatim, so kept untyped.
    #[serde(default)]
    content: Option<Value>,
}
