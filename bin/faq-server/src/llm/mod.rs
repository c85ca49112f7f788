//! Hosted language-model clients.
//!
//! Handlers talk to the model through [`LanguageModel`] so the concrete
//! provider can be swapped (or stubbed in tests) without touching them.

pub mod gemini;

use async_trait::async_trait;
use faq_context::Prompt;
use thiserror::Error;

pub use gemini::GeminiClient;

/// Errors returned by a [`LanguageModel`] call.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Transport failure, timeout, or undecodable body.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("model API returned {status}: {message}")]
    Api { status: u16, message: String },

    /// The API answered but produced no text.
    #[error("model returned no text")]
    EmptyResponse,
}

/// A chat model that turns a [`Prompt`] into a single completion.
#[async_trait]
pub trait LanguageModel: Send + Sync + 'static {
    /// Model identifier, for logging.
    fn model(&self) -> &str;

    async fn complete(&self, prompt: &Prompt) -> Result<String, LlmError>;
}
