//! word_exist_server — HTTP front for the word existence lookup.
//!
//! See [`word_exist::config`] for the environment variables it reads.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use word_exist::{build_router, AppConfig, AppState, CompletionClient, OpenAiCompletionClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,word_exist=debug,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        timeout_secs = config.request_timeout.as_secs(),
        answer_policy = %config.answer_policy,
        "Loaded configuration"
    );

    let client = OpenAiCompletionClient::from_config(&config)?;
    tracing::info!(
        provider = client.provider_name(),
        model = client.model_name(),
        "Completion client ready for {}",
        client.endpoint()
    );
    let state = AppState::new(Arc::new(client), config.answer_policy);
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!("word_exist_server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
