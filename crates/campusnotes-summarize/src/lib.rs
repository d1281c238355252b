//! AI summarization client for CampusNotes.
//!
//! Sends a bounded prefix of the extracted document text to a
//! chat-completions endpoint and returns a structured summary. Callers are
//! expected to treat failures as degradable: the upload pipeline persists
//! documents without a summary when this step fails.
//!
//! The `blocks` module parses the summary's markdown-like section shape into
//! typed blocks so display code never has to prefix-match lines itself.

pub mod blocks;
pub mod client;
pub mod traits;

pub use blocks::{parse_summary_blocks, SummaryBlock};
pub use client::{AiSummarizer, SummarizerConfig};
pub use traits::{Summarize, SummarizeError};
