//! Document repository: CRUD for the documents table.

use campusnotes_core::models::{DocumentDetails, DocumentRecord, NewDocument, UploadRole};
use campusnotes_core::AppError;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Row type for the documents table (for FromRow).
///
/// The academic detail columns are flat in the table; `to_document_record`
/// regroups them into `DocumentDetails`. `upload_role` is stored as TEXT and
/// parsed on the way out.
#[derive(Debug, sqlx::FromRow)]
pub struct DocumentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub file_name: String,
    pub file_url: String,
    pub storage_key: String,
    pub file_size: i64,
    pub college_name: String,
    pub college_address: String,
    pub institution_details: Option<String>,
    pub branch: String,
    pub year_of_study: String,
    pub academic_year: String,
    pub subject_name: String,
    pub chapter: String,
    pub description: Option<String>,
    pub upload_role: String,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub ai_summary: Option<String>,
    pub summary_generated_at: Option<DateTime<Utc>>,
    pub uploaded_at: DateTime<Utc>,
}

impl DocumentRow {
    pub fn to_document_record(self) -> Result<DocumentRecord, AppError> {
        let upload_role: UploadRole = self.upload_role.parse().map_err(|_| {
            AppError::Internal(format!(
                "Document {} has unrecognized upload role '{}'",
                self.id, self.upload_role
            ))
        })?;

        Ok(DocumentRecord {
            id: self.id,
            user_id: self.user_id,
            file_name: self.file_name,
            file_url: self.file_url,
            storage_key: self.storage_key,
            file_size: self.file_size,
            details: DocumentDetails {
                college_name: self.college_name,
                college_address: self.college_address,
                institution_details: self.institution_details,
                branch: self.branch,
                year_of_study: self.year_of_study,
                academic_year: self.academic_year,
                subject_name: self.subject_name,
                chapter: self.chapter,
                description: self.description,
            },
            upload_role,
            is_verified: self.is_verified,
            verified_at: self.verified_at,
            ai_summary: self.ai_summary,
            summary_generated_at: self.summary_generated_at,
            uploaded_at: self.uploaded_at,
        })
    }
}

fn rows_to_records(rows: Vec<DocumentRow>) -> Result<Vec<DocumentRecord>, AppError> {
    rows.into_iter().map(DocumentRow::to_document_record).collect()
}

/// Repository for the documents table.
#[derive(Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new document and return the persisted record.
    #[tracing::instrument(skip(self, document), fields(db.table = "documents", user_id = %document.user_id))]
    pub async fn create(&self, document: NewDocument) -> Result<DocumentRecord, AppError> {
        let row: DocumentRow = sqlx::query_as::<Postgres, DocumentRow>(
            r#"
            INSERT INTO documents (
                user_id, file_name, file_url, storage_key, file_size,
                college_name, college_address, institution_details,
                branch, year_of_study, academic_year, subject_name, chapter, description,
                upload_role, is_verified, verified_at, ai_summary, summary_generated_at
            )
            VALUES (
                $1, $2, $3, $4, $5,
                $6, $7, $8,
                $9, $10, $11, $12, $13, $14,
                $15, $16, $17, $18, $19
            )
            RETURNING *
            "#,
        )
        .bind(document.user_id)
        .bind(&document.file_name)
        .bind(&document.file_url)
        .bind(&document.storage_key)
        .bind(document.file_size)
        .bind(&document.details.college_name)
        .bind(&document.details.college_address)
        .bind(&document.details.institution_details)
        .bind(&document.details.branch)
        .bind(&document.details.year_of_study)
        .bind(&document.details.academic_year)
        .bind(&document.details.subject_name)
        .bind(&document.details.chapter)
        .bind(&document.details.description)
        .bind(document.upload_role.as_str())
        .bind(document.is_verified)
        .bind(document.verified_at)
        .bind(&document.ai_summary)
        .bind(document.summary_generated_at)
        .fetch_one(&self.pool)
        .await?;

        row.to_document_record()
    }

    /// Fetch a document by id.
    #[tracing::instrument(skip(self), fields(db.table = "documents"))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<DocumentRecord>, AppError> {
        let row: Option<DocumentRow> = sqlx::query_as::<Postgres, DocumentRow>(
            "SELECT * FROM documents WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(DocumentRow::to_document_record).transpose()
    }

    /// List a user's documents, newest first.
    #[tracing::instrument(skip(self), fields(db.table = "documents"))]
    pub async fn list_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DocumentRecord>, AppError> {
        let rows: Vec<DocumentRow> = sqlx::query_as::<Postgres, DocumentRow>(
            "SELECT * FROM documents WHERE user_id = $1 ORDER BY uploaded_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(user_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows_to_records(rows)
    }

    /// List documents for a subject, newest first.
    #[tracing::instrument(skip(self), fields(db.table = "documents"))]
    pub async fn list_by_subject(
        &self,
        subject_name: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DocumentRecord>, AppError> {
        let rows: Vec<DocumentRow> = sqlx::query_as::<Postgres, DocumentRow>(
            "SELECT * FROM documents WHERE subject_name = $1 ORDER BY uploaded_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(subject_name)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        rows_to_records(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_row(upload_role: &str) -> DocumentRow {
        let now = Utc::now();
        DocumentRow {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            file_name: "notes.pdf".to_string(),
            file_url: "http://localhost:3000/documents/notes.pdf".to_string(),
            storage_key: "example/cs/2nd-year/os/1700000000000-abc123.pdf".to_string(),
            file_size: 2048,
            college_name: "Example Institute of Technology".to_string(),
            college_address: "12 College Road".to_string(),
            institution_details: None,
            branch: "Computer Science".to_string(),
            year_of_study: "2nd Year".to_string(),
            academic_year: "2025-2026".to_string(),
            subject_name: "Operating Systems".to_string(),
            chapter: "Process Scheduling".to_string(),
            description: None,
            upload_role: upload_role.to_string(),
            is_verified: upload_role != "student",
            verified_at: if upload_role != "student" {
                Some(now)
            } else {
                None
            },
            ai_summary: None,
            summary_generated_at: None,
            uploaded_at: now,
        }
    }

    #[test]
    fn test_row_conversion_regroups_details() {
        let row = test_row("lecturer");
        let record = row.to_document_record().unwrap();

        assert_eq!(record.upload_role, UploadRole::Lecturer);
        assert!(record.is_verified);
        assert_eq!(record.details.subject_name, "Operating Systems");
        assert_eq!(record.details.chapter, "Process Scheduling");
    }

    #[test]
    fn test_row_conversion_rejects_unknown_role() {
        let row = test_row("admin");
        let err = row.to_document_record().unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
