//! Wire types for the legacy completions API.

use serde::{Deserialize, Serialize};

/// Outbound request body.
///
/// Always serialized through serde_json so caller-supplied text inside
/// `prompt` is escaped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            temperature: 0.0,
        }
    }
}

/// Successful completion envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub object: Option<String>,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl CompletionResult {
    /// Text of the first choice, if the provider returned any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.text.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Choice {
    pub text: String,
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub logprobs: serde_json::Value,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u32,
    #[serde(default)]
    pub completion_tokens: u32,
    #[serde(default)]
    pub total_tokens: u32,
}

/// Error envelope returned with a non-200 status.
///
/// Every field is optional: an empty object decodes with an empty message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderErrorResult {
    #[serde(default)]
    pub error: ProviderErrorDetail,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub error_type: Option<String>,
    #[serde(default)]
    pub param: serde_json::Value,
    #[serde(default)]
    pub code: Option<String>,
}
