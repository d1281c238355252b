//! Pipeline persistence adapter over the Postgres repositories.

use async_trait::async_trait;
use campusnotes_core::models::{DocumentRecord, NewDocument};
use campusnotes_core::AppError;
use campusnotes_pipeline::DocumentStore;
use sqlx::PgPool;
use uuid::Uuid;

use super::documents::DocumentRepository;
use super::profiles::ProfileRepository;

/// `DocumentStore` backed by the documents and profiles tables.
#[derive(Clone)]
pub struct PgDocumentStore {
    documents: DocumentRepository,
    profiles: ProfileRepository,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            documents: DocumentRepository::new(pool.clone()),
            profiles: ProfileRepository::new(pool),
        }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_document(&self, document: NewDocument) -> Result<DocumentRecord, AppError> {
        self.documents.create(document).await
    }

    async fn update_points(&self, user_id: Uuid, new_total: i64) -> Result<(), AppError> {
        let updated = self.profiles.update_points(user_id, new_total).await?;
        if updated.is_none() {
            return Err(AppError::NotFound(format!(
                "Profile {} not found",
                user_id
            )));
        }
        Ok(())
    }
}
