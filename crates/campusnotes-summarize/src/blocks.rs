//! Tagged-line parser for summary text.
//!
//! Summaries come back in a fixed markdown-like shape (Overview / Key Points /
//! Important Concepts / Summary). Rather than prefix-matching lines at render
//! time, this module parses the text once into a sequence of typed blocks.

/// A parsed line-level block of summary text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryBlock {
    Heading { level: u8, text: String },
    Bullet(String),
    Paragraph(String),
    Blank,
}

/// Parse summary text into typed blocks.
///
/// Consecutive blank lines collapse into a single `Blank`; heading level is
/// the number of leading `#` characters (capped at 6); `-` and `*` bullets
/// are recognized.
pub fn parse_summary_blocks(text: &str) -> Vec<SummaryBlock> {
    let mut blocks = Vec::new();

    for line in text.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            if !matches!(blocks.last(), Some(SummaryBlock::Blank) | None) {
                blocks.push(SummaryBlock::Blank);
            }
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix('#') {
            let extra = rest.chars().take_while(|c| *c == '#').count();
            let level = (1 + extra).min(6) as u8;
            let heading = rest[extra..].trim_start();
            blocks.push(SummaryBlock::Heading {
                level,
                text: heading.to_string(),
            });
            continue;
        }

        if let Some(rest) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
            blocks.push(SummaryBlock::Bullet(rest.trim().to_string()));
            continue;
        }

        blocks.push(SummaryBlock::Paragraph(trimmed.to_string()));
    }

    // Trailing blank carries no information
    if matches!(blocks.last(), Some(SummaryBlock::Blank)) {
        blocks.pop();
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixed_section_shape() {
        let text = "## Overview\nA short overview.\n\n## Key Points\n- First point\n- Second point\n\n## Important Concepts\nScheduling, preemption\n\n## Summary\nDetailed paragraph.";
        let blocks = parse_summary_blocks(text);

        assert_eq!(
            blocks,
            vec![
                SummaryBlock::Heading {
                    level: 2,
                    text: "Overview".to_string()
                },
                SummaryBlock::Paragraph("A short overview.".to_string()),
                SummaryBlock::Blank,
                SummaryBlock::Heading {
                    level: 2,
                    text: "Key Points".to_string()
                },
                SummaryBlock::Bullet("First point".to_string()),
                SummaryBlock::Bullet("Second point".to_string()),
                SummaryBlock::Blank,
                SummaryBlock::Heading {
                    level: 2,
                    text: "Important Concepts".to_string()
                },
                SummaryBlock::Paragraph("Scheduling, preemption".to_string()),
                SummaryBlock::Blank,
                SummaryBlock::Heading {
                    level: 2,
                    text: "Summary".to_string()
                },
                SummaryBlock::Paragraph("Detailed paragraph.".to_string()),
            ]
        );
    }

    #[test]
    fn test_star_bullets() {
        let blocks = parse_summary_blocks("* one\n* two");
        assert_eq!(
            blocks,
            vec![
                SummaryBlock::Bullet("one".to_string()),
                SummaryBlock::Bullet("two".to_string()),
            ]
        );
    }

    #[test]
    fn test_consecutive_blanks_collapse() {
        let blocks = parse_summary_blocks("a\n\n\n\nb");
        assert_eq!(
            blocks,
            vec![
                SummaryBlock::Paragraph("a".to_string()),
                SummaryBlock::Blank,
                SummaryBlock::Paragraph("b".to_string()),
            ]
        );
    }

    #[test]
    fn test_heading_level_capped() {
        let blocks = parse_summary_blocks("######## deep");
        assert_eq!(
            blocks,
            vec![SummaryBlock::Heading {
                level: 6,
                text: "deep".to_string()
            }]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_summary_blocks("").is_empty());
        assert!(parse_summary_blocks("\n\n").is_empty());
    }

    #[test]
    fn test_no_leading_or_trailing_blank() {
        let blocks = parse_summary_blocks("\n\ntext\n\n");
        assert_eq!(blocks, vec![SummaryBlock::Paragraph("text".to_string())]);
    }
}
