//! Shared constants.

/// Maximum accepted document size: 50 MiB.
pub const MAX_DOCUMENT_SIZE_BYTES: usize = 50 * 1024 * 1024;

/// Points credited to the uploader for every successfully persisted document.
pub const POINTS_PER_UPLOAD: i64 = 5;

/// Maximum number of characters of extracted text sent to the summarizer.
pub const SUMMARY_INPUT_LIMIT_CHARS: usize = 15_000;

/// Token budget for a single summary completion.
pub const SUMMARY_MAX_TOKENS: u32 = 1024;
