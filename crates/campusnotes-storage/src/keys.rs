//! Shared key generation for storage backends.
//!
//! Key format: `{college}/{branch}/{year-of-study}/{subject}/{leaf}` where each
//! segment is slugged and the leaf is `{unix_millis}-{suffix}.{ext}`. The
//! hierarchy mirrors the academic metadata so the store stays human-navigable.

use campusnotes_core::models::DocumentDetails;
use chrono::{DateTime, Utc};
use rand::distr::Alphanumeric;
use rand::Rng;

const SUFFIX_LEN: usize = 6;

/// Slug a path segment: lower-case, whitespace runs become single hyphens,
/// anything outside `[a-z0-9-]` is dropped, hyphen runs are collapsed.
pub fn slug(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    let mut last_hyphen = true; // suppress leading hyphens
    for c in segment.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' || c == '_' {
            if !last_hyphen {
                out.push('-');
                last_hyphen = true;
            }
        } else if c.is_ascii_alphanumeric() {
            out.push(c);
            last_hyphen = false;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    if out.is_empty() {
        "unknown".to_string()
    } else {
        out
    }
}

/// Random lower-case alphanumeric suffix for leaf filenames.
pub fn random_suffix() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect()
}

/// Build a collision-resistant leaf filename preserving the original extension.
///
/// Deterministic given the same timestamp and suffix.
pub fn unique_leaf_name(original_file_name: &str, now: DateTime<Utc>, suffix: &str) -> String {
    let extension = std::path::Path::new(original_file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_else(|| "pdf".to_string());
    format!("{}-{}.{}", now.timestamp_millis(), suffix, extension)
}

/// Derive the full storage key for a document from its academic metadata.
pub fn document_storage_key(details: &DocumentDetails, leaf: &str) -> String {
    format!(
        "{}/{}/{}/{}/{}",
        slug(&details.college_name),
        slug(&details.branch),
        slug(&details.year_of_study),
        slug(&details.subject_name),
        leaf
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn details() -> DocumentDetails {
        DocumentDetails {
            college_name: "Example Institute of Technology".to_string(),
            college_address: "12 College Road".to_string(),
            institution_details: None,
            branch: "Computer Science".to_string(),
            year_of_study: "2nd Year".to_string(),
            academic_year: "2025-2026".to_string(),
            subject_name: "Operating Systems".to_string(),
            chapter: "Scheduling".to_string(),
            description: None,
        }
    }

    #[test]
    fn test_slug_basic() {
        assert_eq!(slug("Computer Science"), "computer-science");
        assert_eq!(slug("  2nd   Year "), "2nd-year");
        assert_eq!(slug("C++ & Data Structures"), "c-data-structures");
    }

    #[test]
    fn test_slug_never_empty() {
        assert_eq!(slug("???"), "unknown");
        assert_eq!(slug(""), "unknown");
    }

    #[test]
    fn test_unique_leaf_name_deterministic() {
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap();
        let a = unique_leaf_name("notes.pdf", now, "abc123");
        let b = unique_leaf_name("notes.pdf", now, "abc123");
        assert_eq!(a, b);
        assert!(a.ends_with(".pdf"));
        assert!(a.starts_with(&now.timestamp_millis().to_string()));
    }

    #[test]
    fn test_unique_leaf_name_preserves_extension() {
        let now = Utc::now();
        assert!(unique_leaf_name("Notes.PDF", now, "xyz").ends_with(".pdf"));
        // No extension falls back to pdf
        assert!(unique_leaf_name("notes", now, "xyz").ends_with(".pdf"));
    }

    #[test]
    fn test_document_storage_key_hierarchy() {
        let key = document_storage_key(&details(), "123-abc.pdf");
        assert_eq!(
            key,
            "example-institute-of-technology/computer-science/2nd-year/operating-systems/123-abc.pdf"
        );
        assert!(!key.contains(".."));
        assert!(!key.starts_with('/'));
    }

    #[test]
    fn test_random_suffix_shape() {
        let suffix = random_suffix();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
