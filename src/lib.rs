//! Word existence lookup backed by a text-completion model.
//!
//! `GET /api/exist?lang=<language>&word=<word>` asks the configured
//! completion provider whether `word` is in the `language` dictionary and
//! answers `{"word", "lang", "exist"}`, or `{"message"}` when anything along
//! the way fails.
//!
//! ## Flow
//!
//! ```text
//! WordQuery → build_prompt → CompletionClient::complete → AnswerPolicy → LookupResponse
//! ```

pub mod answer;
pub mod completion;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod types;

// Re-exports for convenience
pub use answer::AnswerPolicy;
pub use completion::{CompletionClient, OpenAiCompletionClient};
pub use config::AppConfig;
pub use error::{LookupError, LookupResult};
pub use handlers::AppState;
pub use router::build_router;
pub use types::{ErrorResponse, LookupResponse, WordQuery};
