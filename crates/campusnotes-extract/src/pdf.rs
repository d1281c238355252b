//! PDF text extraction backed by the pdf-extract crate.

use async_trait::async_trait;

use crate::traits::{ExtractionError, ExtractionResult, ProgressFn, TextExtract};

/// PDF text extractor.
pub struct PdfTextExtractor;

impl Default for PdfTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }
}

/// Join page texts in order with a blank line between pages, reporting
/// progress after each page. The final text is trimmed.
fn join_pages(pages: &[String], progress: ProgressFn<'_>) -> String {
    let total = pages.len();
    let mut full_text = String::new();

    for (i, page) in pages.iter().enumerate() {
        if !full_text.is_empty() {
            full_text.push_str("\n\n");
        }
        full_text.push_str(page.trim());

        let percent = (((i + 1) as f64 / total as f64) * 100.0).round() as u8;
        progress(percent);
    }

    full_text.trim().to_string()
}

#[async_trait]
impl TextExtract for PdfTextExtractor {
    async fn extract(
        &self,
        data: &[u8],
        progress: ProgressFn<'_>,
    ) -> Result<ExtractionResult, ExtractionError> {
        let pages = pdf_extract::extract_text_from_mem_by_pages(data)
            .map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

        let page_count = pages.len();
        let text = join_pages(&pages, progress);

        if text.is_empty() {
            tracing::warn!(page_count, "PDF text extraction returned empty text");
        } else {
            tracing::debug!(
                page_count,
                text_len = text.len(),
                "PDF text extracted"
            );
        }

        Ok(ExtractionResult { text, page_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn collect_progress(pages: &[String]) -> (String, Vec<u8>) {
        let reported = Mutex::new(Vec::new());
        let text = join_pages(pages, &|p| reported.lock().unwrap().push(p));
        let reported = reported.into_inner().unwrap();
        (text, reported)
    }

    fn pages(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_join_pages_blank_line_separator() {
        let (text, _) = collect_progress(&pages(&["page one", "page two", "page three"]));
        assert_eq!(text, "page one\n\npage two\n\npage three");
    }

    #[test]
    fn test_join_pages_trims_result() {
        let (text, _) = collect_progress(&pages(&["  leading spaces", "trailing newline\n\n"]));
        assert_eq!(text, "leading spaces\n\ntrailing newline");
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_progress_non_decreasing_and_complete() {
        let many: Vec<String> = (0..7).map(|i| format!("page {}", i)).collect();
        let (_, reported) = collect_progress(&many);

        assert_eq!(reported.len(), 7);
        assert!(reported.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*reported.last().unwrap(), 100);
    }

    #[test]
    fn test_progress_single_page() {
        let (_, reported) = collect_progress(&pages(&["only page"]));
        assert_eq!(reported, vec![100]);
    }

    #[test]
    fn test_progress_rounding() {
        // 3 pages: 33, 67, 100
        let (_, reported) = collect_progress(&pages(&["a", "b", "c"]));
        assert_eq!(reported, vec![33, 67, 100]);
    }

    #[tokio::test]
    async fn test_extract_rejects_garbage() {
        let extractor = PdfTextExtractor::new();
        let result = extractor.extract(b"this is not a pdf", &|_| {}).await;
        assert!(matches!(result, Err(ExtractionError::Unreadable(_))));
    }
}
