//! Extraction trait and result types.

use async_trait::async_trait;
use thiserror::Error;

/// Extraction errors
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to extract text from document: {0}")]
    Unreadable(String),
}

/// Extracted text plus page count.
///
/// `text` never carries leading or trailing whitespace; pages are separated by
/// a single blank line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub text: String,
    pub page_count: usize,
}

/// Callback invoked with an integer percentage (0..=100) after each page.
pub type ProgressFn<'a> = &'a (dyn Fn(u8) + Send + Sync);

/// Text extraction abstraction.
///
/// Implementations must process pages in order 1..N and report progress as
/// `round(page / total * 100)` after each page, so the reported sequence is
/// non-decreasing and ends at exactly 100.
#[async_trait]
pub trait TextExtract: Send + Sync {
    async fn extract(
        &self,
        data: &[u8],
        progress: ProgressFn<'_>,
    ) -> Result<ExtractionResult, ExtractionError>;
}
