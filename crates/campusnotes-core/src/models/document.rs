use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::UploadRole;

/// Academic metadata bundle attached to every upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentDetails {
    pub college_name: String,
    pub college_address: String,
    pub institution_details: Option<String>,
    pub branch: String,
    pub year_of_study: String,
    pub academic_year: String,
    pub subject_name: String,
    pub chapter: String,
    pub description: Option<String>,
}

/// Persisted document entity.
///
/// Created exactly once per successful pipeline run; the upload pipeline
/// never updates a record after creation (summary regeneration for records
/// saved without one is handled elsewhere).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub storage_key: String,
    pub file_size: i64,
    pub details: DocumentDetails,
    pub upload_role: UploadRole,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub ai_summary: Option<String>,
    pub summary_generated_at: Option<DateTime<Utc>>,
    pub uploaded_at: DateTime<Utc>,
}

impl DocumentRecord {
    pub fn has_summary(&self) -> bool {
        self.ai_summary.is_some()
    }
}

/// Insert payload for a document record; the repository generates id and
/// uploaded_at.
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub user_id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub storage_key: String,
    pub file_size: i64,
    pub details: DocumentDetails,
    pub upload_role: UploadRole,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub ai_summary: Option<String>,
    pub summary_generated_at: Option<DateTime<Utc>>,
}

/// Caller-facing projection of a document record.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub file_name: String,
    pub url: String,
    pub file_size: i64,
    pub college_name: String,
    pub branch: String,
    pub subject_name: String,
    pub chapter: String,
    pub upload_role: UploadRole,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_generated_at: Option<DateTime<Utc>>,
    pub uploaded_at: DateTime<Utc>,
}

impl From<DocumentRecord> for DocumentResponse {
    fn from(doc: DocumentRecord) -> Self {
        DocumentResponse {
            id: doc.id,
            file_name: doc.file_name,
            url: doc.file_url,
            file_size: doc.file_size,
            college_name: doc.details.college_name,
            branch: doc.details.branch,
            subject_name: doc.details.subject_name,
            chapter: doc.details.chapter,
            upload_role: doc.upload_role,
            is_verified: doc.is_verified,
            verified_at: doc.verified_at,
            ai_summary: doc.ai_summary,
            summary_generated_at: doc.summary_generated_at,
            uploaded_at: doc.uploaded_at,
        }
    }
}
