//! Upload orchestrator: validate → extract → store → summarize → save.
//!
//! The pipeline runs its steps strictly in order and fails with exactly one
//! terminal error, the first mandatory step that broke. Summarization and the
//! point award are best-effort: their failures degrade the result (no summary,
//! no points) but never the run. Progress is published on a `watch` channel so
//! a caller can render it without participating in the flow.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::watch;

use campusnotes_core::models::{DocumentRecord, NewDocument, SummaryResult, UploadRequest};
use campusnotes_core::UploadValidator;
use campusnotes_extract::TextExtract;
use campusnotes_storage::{keys, Storage};
use campusnotes_summarize::Summarize;

use crate::error::PipelineError;
use crate::progress::{UploadProgress, UploadStage};
use crate::session::UploaderSession;
use crate::store::DocumentStore;

// Progress checkpoints after the extraction phase.
const PERCENT_UPLOAD_START: u8 = 10;
const PERCENT_STORED: u8 = 40;
const PERCENT_SUMMARIZING: u8 = 50;
const PERCENT_SUMMARY_DONE: u8 = 80;
const PERCENT_COMPLETE: u8 = 100;

/// One-shot upload orchestrator.
///
/// Construct per upload; `run` consumes the request and drives all steps.
/// Collaborators are trait objects so tests can substitute fakes, and the
/// summarizer is optional: a deployment without one still produces valid
/// (summary-less) documents.
pub struct UploadPipeline {
    validator: UploadValidator,
    extractor: Arc<dyn TextExtract>,
    storage: Arc<dyn Storage>,
    summarizer: Option<Arc<dyn Summarize>>,
    store: Arc<dyn DocumentStore>,
    points_per_upload: i64,
    progress: watch::Sender<UploadProgress>,
}

impl UploadPipeline {
    pub fn new(
        extractor: Arc<dyn TextExtract>,
        storage: Arc<dyn Storage>,
        summarizer: Option<Arc<dyn Summarize>>,
        store: Arc<dyn DocumentStore>,
        max_file_size: usize,
        points_per_upload: i64,
    ) -> Self {
        let (progress, _) = watch::channel(UploadProgress::idle());
        Self {
            validator: UploadValidator::new(max_file_size),
            extractor,
            storage,
            summarizer,
            store,
            points_per_upload,
            progress,
        }
    }

    /// Subscribe to progress updates for this pipeline's runs.
    pub fn subscribe(&self) -> watch::Receiver<UploadProgress> {
        self.progress.subscribe()
    }

    fn set_progress(&self, stage: UploadStage, percent: u8) {
        self.progress.send_replace(UploadProgress { stage, percent });
    }

    /// Move to the Error stage, keeping the last reported percent.
    fn mark_failed(&self) {
        let percent = self.progress.borrow().percent;
        self.set_progress(UploadStage::Error, percent);
    }

    fn abort<E: Into<PipelineError>>(&self, err: E) -> PipelineError {
        self.mark_failed();
        let err = err.into();
        tracing::error!(kind = err.kind(), error = %err, "Upload run aborted");
        err
    }

    /// Run the full upload flow for one document.
    pub async fn run(
        &self,
        session: Option<UploaderSession>,
        mut request: UploadRequest,
    ) -> Result<DocumentRecord, PipelineError> {
        let session = match session {
            Some(s) => s,
            None => return Err(self.abort(PipelineError::Unauthorized)),
        };

        self.validator
            .validate_all(&request)
            .map_err(|e| self.abort(e))?;

        let file_size = request.file_size() as i64;
        tracing::info!(
            user_id = %session.user_id,
            file_name = %request.file_name,
            file_size,
            "Starting document upload"
        );

        // Extraction drives the percentage directly while it runs.
        self.set_progress(UploadStage::Extracting, 0);
        let sender = self.progress.clone();
        let report = move |percent: u8| {
            sender.send_replace(UploadProgress {
                stage: UploadStage::Extracting,
                percent,
            });
        };
        let extraction = self
            .extractor
            .extract(&request.data, &report)
            .await
            .map_err(|e| self.abort(e))?;
        tracing::info!(
            page_count = extraction.page_count,
            text_len = extraction.text.len(),
            "Text extracted"
        );

        self.set_progress(UploadStage::Uploading, PERCENT_UPLOAD_START);
        let leaf = keys::unique_leaf_name(&request.file_name, Utc::now(), &keys::random_suffix());
        let storage_key = keys::document_storage_key(&request.details, &leaf);
        let data = std::mem::take(&mut request.data);
        let file_url = self
            .storage
            .upload(&storage_key, &request.content_type, data)
            .await
            .map_err(|e| self.abort(e))?;
        self.set_progress(UploadStage::Uploading, PERCENT_STORED);

        self.set_progress(UploadStage::Summarizing, PERCENT_SUMMARIZING);
        let summary = self.summarize_best_effort(&extraction.text, &request.file_name).await;
        self.set_progress(UploadStage::Saving, PERCENT_SUMMARY_DONE);

        let verification = request.upload_role.verification(Utc::now());
        let new_document = NewDocument {
            user_id: session.user_id,
            file_name: request.file_name,
            file_url,
            storage_key: storage_key.clone(),
            file_size,
            details: request.details,
            upload_role: request.upload_role,
            is_verified: verification.is_verified,
            verified_at: verification.verified_at,
            ai_summary: summary.as_ref().map(|s| s.summary.clone()),
            summary_generated_at: summary.as_ref().map(|s| s.generated_at),
        };

        let record = match self.store.insert_document(new_document).await {
            Ok(record) => record,
            Err(e) => {
                // The binary is already stored; remove it so a failed save
                // leaves no orphaned object behind.
                match self.storage.delete(&storage_key).await {
                    Ok(()) => tracing::info!(
                        storage_key = %storage_key,
                        "Removed stored binary after failed save"
                    ),
                    Err(del_err) => tracing::warn!(
                        storage_key = %storage_key,
                        error = %del_err,
                        "Could not remove stored binary after failed save"
                    ),
                }
                return Err(self.abort(e));
            }
        };

        self.award_points_best_effort(&session).await;

        self.set_progress(UploadStage::Complete, PERCENT_COMPLETE);
        tracing::info!(
            document_id = %record.id,
            has_summary = record.has_summary(),
            "Document upload complete"
        );
        Ok(record)
    }

    async fn summarize_best_effort(&self, text: &str, file_name: &str) -> Option<SummaryResult> {
        let summarizer = match &self.summarizer {
            Some(s) => s,
            None => {
                tracing::debug!("No summarizer configured, skipping summarization");
                return None;
            }
        };
        match summarizer.summarize(text, Some(file_name)).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::warn!(error = %e, "Summarization failed, saving document without summary");
                None
            }
        }
    }

    async fn award_points_best_effort(&self, session: &UploaderSession) {
        let points = match session.points {
            Some(p) => p,
            None => {
                tracing::debug!(
                    user_id = %session.user_id,
                    "Uploader balance unknown, skipping point award"
                );
                return;
            }
        };
        let new_total = points + self.points_per_upload;
        match self.store.update_points(session.user_id, new_total).await {
            Ok(()) => tracing::info!(
                user_id = %session.user_id,
                new_total,
                "Awarded contribution points"
            ),
            Err(e) => tracing::warn!(
                user_id = %session.user_id,
                error = %e,
                "Point award failed, document was still saved"
            ),
        }
    }
}
