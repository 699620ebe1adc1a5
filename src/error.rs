//! Lookup error taxonomy.
//!
//! Every variant renders the message that is written back to the caller in
//! an [`ErrorResponse`](crate::types::ErrorResponse) body.

use thiserror::Error;

/// Message returned when not even an error payload can be encoded.
pub const GENERIC_ERROR_MESSAGE: &str = "Uh no! Something went wrong. Please try again later";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Error while creating completion API request")]
    RequestConstruction(#[source] reqwest::Error),

    #[error("Error while executing completion API request:\n {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Can't decode provider error response:\n {0}")]
    ProviderErrorDecode(#[source] serde_json::Error),

    #[error("Got completion API error. Message:\n {0}")]
    ProviderReported(String),

    #[error("Can't decode completion response:\n {0}")]
    SuccessDecode(#[source] serde_json::Error),

    #[error("Got completion API error. Message:\n no completion choices returned")]
    EmptyChoices,

    #[error("Completion answer is neither true nor false: {0:?}")]
    AmbiguousAnswer(String),

    #[error("Can't encode response:\n {0}")]
    ResponseSerialize(#[source] serde_json::Error),
}

impl LookupError {
    /// Stable short name, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::RequestConstruction(_) => "request_construction",
            Self::Transport(_) => "transport",
            Self::ProviderErrorDecode(_) => "provider_error_decode",
            Self::ProviderReported(_) => "provider_reported",
            Self::SuccessDecode(_) => "success_decode",
            Self::EmptyChoices => "empty_choices",
            Self::AmbiguousAnswer(_) => "ambiguous_answer",
            Self::ResponseSerialize(_) => "response_serialize",
        }
    }
}

pub type LookupResult<T> = Result<T, LookupError>;
