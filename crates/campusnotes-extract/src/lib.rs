//! Text extraction for uploaded documents.
//!
//! The extractor walks a document's pages in order, joins their text with a
//! blank line between pages, and reports fractional progress after each page.
//! The result is ephemeral: it only feeds the summarization step and is never
//! persisted verbatim.

pub mod pdf;
pub mod traits;

pub use pdf::PdfTextExtractor;
pub use traits::{ExtractionError, ExtractionResult, ProgressFn, TextExtract};
