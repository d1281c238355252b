//! Persistence seam for the pipeline.

use async_trait::async_trait;
use campusnotes_core::models::{DocumentRecord, NewDocument};
use campusnotes_core::AppError;
use uuid::Uuid;

/// Persistence operations the pipeline needs.
///
/// Kept deliberately narrow (one insert, one point update) so tests can
/// substitute an in-memory fake and the database crate stays a detail.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert the document record. Exactly one row per call.
    async fn insert_document(&self, document: NewDocument) -> Result<DocumentRecord, AppError>;

    /// Set the uploader's contribution point balance to `new_total`.
    async fn update_points(&self, user_id: Uuid, new_total: i64) -> Result<(), AppError>;
}
