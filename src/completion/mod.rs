//! Completion provider abstraction.
//!
//! The lookup handler only needs "send a prompt, get a completion back".
//! [`CompletionClient`] is that seam; [`OpenAiCompletionClient`] is the
//! production implementation talking to the legacy `/v1/completions` API.

pub mod openai;
pub mod prompt;
pub mod types;

use async_trait::async_trait;

use crate::error::LookupResult;

pub use openai::OpenAiCompletionClient;
pub use prompt::build_prompt;
pub use types::{
    Choice, CompletionRequest, CompletionResult, ProviderErrorDetail, ProviderErrorResult, Usage,
};

/// Unified interface for text-completion providers
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send `prompt` and return the decoded completion.
    ///
    /// Provider-side failures (error status, undecodable bodies) are mapped to
    /// the corresponding [`LookupError`](crate::error::LookupError) variant.
    async fn complete(&self, prompt: &str) -> LookupResult<CompletionResult>;

    /// Get the model name for logging
    fn model_name(&self) -> &str;

    /// Get the provider name for logging
    fn provider_name(&self) -> &str;
}
