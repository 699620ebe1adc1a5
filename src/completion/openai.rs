//! OpenAI Completions Client
//!
//! [`CompletionClient`] implementation for the OpenAI `/v1/completions` API.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode};

use super::types::{CompletionRequest, CompletionResult, ProviderErrorResult};
use super::CompletionClient;
use crate::config::AppConfig;
use crate::error::{LookupError, LookupResult};

/// Default completions endpoint
pub const DEFAULT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/completions";

/// Default completion model
pub const DEFAULT_MODEL: &str = "text-davinci-003";

/// OpenAI completions client
#[derive(Clone)]
pub struct OpenAiCompletionClient {
    api_key: String,
    client: Client,
    endpoint: String,
    model: String,
}

impl std::fmt::Debug for OpenAiCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiCompletionClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl OpenAiCompletionClient {
    /// Create a client with an explicit endpoint, model and request timeout
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            api_key: api_key.into(),
            client,
            endpoint: endpoint.into(),
            model: model.into(),
        })
    }

    /// Create from loaded application config
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(
            config.api_key.clone(),
            config.completions_url.clone(),
            config.model.clone(),
            config.request_timeout,
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(&self, prompt: &str) -> LookupResult<CompletionResult> {
        let body = CompletionRequest::new(self.model.as_str(), prompt);

        let request = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .json(&body)
            .build()
            .map_err(LookupError::RequestConstruction)?;

        let response = self
            .client
            .execute(request)
            .await
            .map_err(LookupError::Transport)?;

        let status = response.status();
        let response_text = response.text().await.map_err(LookupError::Transport)?;
        tracing::debug!(
            status = status.as_u16(),
            "Completion raw response: {}",
            &response_text[..floor_char_boundary(&response_text, 1000)]
        );

        if status != StatusCode::OK {
            let error: ProviderErrorResult = serde_json::from_str(&response_text)
                .map_err(LookupError::ProviderErrorDecode)?;
            return Err(LookupError::ProviderReported(error.error.message));
        }

        serde_json::from_str(&response_text).map_err(LookupError::SuccessDecode)
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn provider_name(&self) -> &str {
        "OpenAI"
    }
}

/// Largest index `<= max` that lies on a char boundary of `s`.
fn floor_char_boundary(s: &str, max: usize) -> usize {
    if max >= s.len() {
        return s.len();
    }
    (0..=max).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}
