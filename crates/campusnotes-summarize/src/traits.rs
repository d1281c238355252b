//! Summarization trait and error kinds.

use async_trait::async_trait;
use campusnotes_core::models::SummaryResult;
use thiserror::Error;

/// Summarization errors.
///
/// Rate limiting and credit exhaustion are distinguished from generic API
/// failures so callers can pick different retry policies per kind; no retry
/// is performed internally.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("AI credits exhausted. Please add funds.")]
    CreditsExhausted,

    #[error("Summarization request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Summarization transport error: {0}")]
    Transport(String),

    #[error("No summary generated")]
    EmptySummary,

    #[error("No document text provided")]
    EmptyInput,
}

impl From<reqwest::Error> for SummarizeError {
    fn from(err: reqwest::Error) -> Self {
        SummarizeError::Transport(err.to_string())
    }
}

/// Summarization abstraction.
#[async_trait]
pub trait Summarize: Send + Sync {
    /// Summarize the given document text. `file_name` is included in the
    /// prompt when present.
    async fn summarize(
        &self,
        text: &str,
        file_name: Option<&str>,
    ) -> Result<SummaryResult, SummarizeError>;
}
