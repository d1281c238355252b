use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// AI-generated summary of an uploaded document.
///
/// Absence is a first-class state: the pipeline persists records with no
/// summary whenever the summarization step is skipped or fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    pub generated_at: DateTime<Utc>,
    pub model: String,
}
