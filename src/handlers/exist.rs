//! GET /api/exist?lang=..&word=.. — ask the completion model whether a word
//! exists in a language's dictionary.

use axum::extract::{RawQuery, State};
use axum::response::Response;
use tracing::{debug, warn};

use super::{encode, error_response, json_body, AppState};
use crate::completion::build_prompt;
use crate::error::{LookupError, LookupResult};
use crate::types::{LookupResponse, WordQuery};

pub async fn exist(State(state): State<AppState>, RawQuery(raw): RawQuery) -> Response {
    let query = WordQuery::from_raw_query(raw.as_deref());
    debug!(word = %query.word, lang = %query.language, "Word lookup");

    let outcome = lookup(&state, query)
        .await
        .and_then(|resp| encode(&resp));

    match outcome {
        Ok(body) => json_body(body),
        Err(e) => {
            warn!(kind = e.kind(), "Word lookup failed: {}", e);
            error_response(&e)
        }
    }
}

/// Prompt the provider and read its first choice through the configured
/// answer policy.
pub async fn lookup(state: &AppState, query: WordQuery) -> LookupResult<LookupResponse> {
    let prompt = build_prompt(&query);
    let completion = state.completion.complete(&prompt).await?;

    let text = completion.first_text().ok_or(LookupError::EmptyChoices)?;
    let exists = state.answer_policy.interpret(text)?;

    debug!(
        provider = state.completion.provider_name(),
        model = state.completion.model_name(),
        exists,
        "Completion answered {:?}",
        text
    );

    Ok(LookupResponse {
        word: query.word,
        language: query.language,
        exists,
    })
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;
    use crate::answer::AnswerPolicy;
    use crate::completion::{Choice, CompletionClient, CompletionResult};
    use crate::router::build_router;

    /// Canned provider that records the prompts it receives.
    struct FakeCompletion {
        reply: fn() -> LookupResult<CompletionResult>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeCompletion {
        fn new(reply: fn() -> LookupResult<CompletionResult>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionClient for FakeCompletion {
        async fn complete(&self, prompt: &str) -> LookupResult<CompletionResult> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            (self.reply)()
        }

        fn model_name(&self) -> &str {
            "fake-model"
        }

        fn provider_name(&self) -> &str {
            "Fake"
        }
    }

    fn answer(text: &str) -> LookupResult<CompletionResult> {
        Ok(CompletionResult {
            choices: vec![Choice {
                text: text.to_string(),
                ..Default::default()
            }],
            ..Default::default()
        })
    }

    async fn get_json(
        client: Arc<FakeCompletion>,
        policy: AnswerPolicy,
        uri: &str,
    ) -> serde_json::Value {
        let app = build_router(AppState::new(client, policy));
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn true_answer_reports_existing_word() {
        let client = FakeCompletion::new(|| answer("true"));
        let body = get_json(
            client.clone(),
            AnswerPolicy::Substring,
            "/api/exist?lang=italian&word=ciao",
        )
        .await;
        assert_eq!(
            body,
            serde_json::json!({"word": "ciao", "lang": "italian", "exist": true})
        );

        let prompts = client.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("in the italian dictionary: ciao."));
    }

    #[tokio::test]
    async fn false_answer_reports_missing_word() {
        let client = FakeCompletion::new(|| answer("false"));
        let body = get_json(client, AnswerPolicy::Substring, "/api/exist?lang=en&word=blorft").await;
        assert_eq!(
            body,
            serde_json::json!({"word": "blorft", "lang": "en", "exist": false})
        );
    }

    #[tokio::test]
    async fn prose_containing_true_counts_as_true() {
        let client = FakeCompletion::new(|| answer("this is not true at all"));
        let body = get_json(client, AnswerPolicy::Substring, "/api/exist?lang=en&word=x").await;
        assert_eq!(body["exist"], true);
    }

    #[tokio::test]
    async fn strict_policy_reports_ambiguous_answer() {
        let client = FakeCompletion::new(|| answer("this is not true at all"));
        let body = get_json(client, AnswerPolicy::Strict, "/api/exist?lang=en&word=x").await;
        assert!(body.get("exist").is_none());
        assert!(body["message"]
            .as_str()
            .unwrap()
            .contains("neither true nor false"));
    }

    #[tokio::test]
    async fn empty_choices_become_error_message() {
        let client = FakeCompletion::new(|| Ok(CompletionResult::default()));
        let body = get_json(client, AnswerPolicy::Substring, "/api/exist?lang=en&word=x").await;
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Got completion API error. Message:\n no completion choices returned"
            })
        );
    }

    #[tokio::test]
    async fn provider_error_is_relayed() {
        let client = FakeCompletion::new(|| {
            Err(LookupError::ProviderReported(
                "You exceeded your current quota".into(),
            ))
        });
        let body = get_json(client, AnswerPolicy::Substring, "/api/exist?lang=en&word=x").await;
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("You exceeded your current quota"));
        assert!(body.get("exist").is_none());
    }

    #[tokio::test]
    async fn missing_params_are_passed_through_as_empty() {
        let client = FakeCompletion::new(|| answer("false"));
        let body = get_json(client.clone(), AnswerPolicy::Substring, "/api/exist").await;
        assert_eq!(body, serde_json::json!({"word": "", "lang": "", "exist": false}));
        assert!(client.prompts.lock().unwrap()[0].contains("in the  dictionary: ."));
    }

    #[tokio::test]
    async fn repeated_params_use_first_value() {
        let client = FakeCompletion::new(|| answer("true"));
        let body = get_json(
            client.clone(),
            AnswerPolicy::Substring,
            "/api/exist?lang=en&word=a&word=b",
        )
        .await;
        assert_eq!(body, serde_json::json!({"word": "a", "lang": "en", "exist": true}));
        assert!(client.prompts.lock().unwrap()[0].contains("in the en dictionary: a."));
    }

    #[tokio::test]
    async fn percent_encoded_params_are_decoded() {
        let client = FakeCompletion::new(|| answer("true"));
        let body = get_json(
            client,
            AnswerPolicy::Substring,
            "/api/exist?lang=portuguese&word=p%C3%A3o%20%22doce%22",
        )
        .await;
        assert_eq!(body["word"], "pão \"doce\"");
        assert_eq!(body["lang"], "portuguese");
    }
}
