//! Terminal error for a failed upload run.
//!
//! Exactly one variant is produced per failed run: the first mandatory
//! step that failed. Summarization and point-award failures never appear
//! here; they degrade the result instead of failing the run.

use campusnotes_core::{AppError, ValidationError};
use campusnotes_extract::ExtractionError;
use campusnotes_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Upload failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Upload failed: could not read the document: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("Upload failed: could not store the document: {0}")]
    Storage(#[from] StorageError),

    #[error("Upload failed: could not save the document record: {0}")]
    Persistence(#[from] AppError),

    #[error("Upload failed: you must be signed in to upload documents")]
    Unauthorized,
}

impl PipelineError {
    /// Stable machine-readable kind, for logs and callers that branch on
    /// failure class without matching the payload.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Validation(_) => "validation",
            PipelineError::Extraction(_) => "extraction",
            PipelineError::Storage(_) => "storage",
            PipelineError::Persistence(_) => "persistence",
            PipelineError::Unauthorized => "unauthorized",
        }
    }
}
