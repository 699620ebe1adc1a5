//! HTTP handlers and the state they share.

pub mod exist;
pub mod health;

use std::sync::Arc;

use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::answer::AnswerPolicy;
use crate::completion::CompletionClient;
use crate::error::{LookupError, GENERIC_ERROR_MESSAGE};
use crate::types::ErrorResponse;

/// Router state. Immutable and shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionClient>,
    pub answer_policy: AnswerPolicy,
}

impl AppState {
    pub fn new(completion: Arc<dyn CompletionClient>, answer_policy: AnswerPolicy) -> Self {
        Self {
            completion,
            answer_policy,
        }
    }
}

fn generic_error_body() -> Vec<u8> {
    serde_json::json!({ "message": GENERIC_ERROR_MESSAGE })
        .to_string()
        .into_bytes()
}

/// Write an already-encoded JSON body with the default status.
pub(crate) fn json_body(body: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Encode a success payload.
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, LookupError> {
    serde_json::to_vec(value).map_err(LookupError::ResponseSerialize)
}

/// Write `err` as `{"message": ...}`.
pub(crate) fn error_response(err: &LookupError) -> Response {
    let payload = ErrorResponse {
        message: err.to_string(),
    };
    match serde_json::to_vec(&payload) {
        Ok(body) => json_body(body),
        Err(e) => {
            tracing::error!("Failed to encode error response: {}", e);
            json_body(generic_error_body())
        }
    }
}
