//! Shared helpers for the CampusNotes CLI binary.

pub mod form;

use campusnotes_summarize::{parse_summary_blocks, SummaryBlock};

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Render a stored summary for terminal output.
///
/// Headings become upper-cased section titles, bullets get a dash indent,
/// paragraphs pass through. Blank blocks keep the section spacing.
pub fn render_summary(text: &str) -> String {
    let mut out = String::new();
    for block in parse_summary_blocks(text) {
        match block {
            SummaryBlock::Heading { text, .. } => {
                out.push_str(&text.to_uppercase());
                out.push('\n');
            }
            SummaryBlock::Bullet(item) => {
                out.push_str("  - ");
                out.push_str(&item);
                out.push('\n');
            }
            SummaryBlock::Paragraph(p) => {
                out.push_str(&p);
                out.push('\n');
            }
            SummaryBlock::Blank => out.push('\n'),
        }
    }
    out
}
