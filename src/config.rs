//! Service configuration.
//!
//! Reads config from env vars (a `.env` file is honoured by the binary):
//!   OPENAI_API_KEY           — bearer credential for the provider (required)
//!   OPENAI_COMPLETIONS_URL   — completions endpoint
//!   OPENAI_MODEL             — completion model id
//!   WORD_EXIST_BIND_ADDR     — listen address (default: 0.0.0.0:3000)
//!   WORD_EXIST_TIMEOUT_SECS  — outbound request timeout (default: 30)
//!   WORD_EXIST_ANSWER_POLICY — `substring` (default) or `strict`

use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::answer::AnswerPolicy;
use crate::completion::openai::{DEFAULT_COMPLETIONS_URL, DEFAULT_MODEL};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: String,
    pub completions_url: String,
    pub model: String,
    pub bind_addr: String,
    pub request_timeout: Duration,
    pub answer_policy: AnswerPolicy,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &"<redacted>")
            .field("completions_url", &self.completions_url)
            .field("model", &self.model)
            .field("bind_addr", &self.bind_addr)
            .field("request_timeout", &self.request_timeout)
            .field("answer_policy", &self.answer_policy)
            .finish()
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .ok_or_else(|| anyhow!("OPENAI_API_KEY environment variable not set"))?;

        let request_timeout = match lookup("WORD_EXIST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .map_err(|e| anyhow!("invalid WORD_EXIST_TIMEOUT_SECS '{raw}': {e}"))?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let answer_policy = match lookup("WORD_EXIST_ANSWER_POLICY") {
            Some(raw) => raw
                .parse::<AnswerPolicy>()
                .map_err(|e| anyhow!("invalid WORD_EXIST_ANSWER_POLICY: {e}"))?,
            None => AnswerPolicy::default(),
        };

        Ok(Self {
            api_key,
            completions_url: lookup("OPENAI_COMPLETIONS_URL")
                .unwrap_or_else(|| DEFAULT_COMPLETIONS_URL.to_string()),
            model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            bind_addr: lookup("WORD_EXIST_BIND_ADDR")
                .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            request_timeout,
            answer_policy,
        })
    }
}
