//! Upload orchestration for CampusNotes.
//!
//! Ties extraction, storage, summarization and persistence together into a
//! single sequential flow with observable progress. All collaborators enter
//! through trait objects; this crate owns only the ordering, the progress
//! contract and the failure policy.

pub mod error;
pub mod progress;
pub mod session;
pub mod store;
pub mod upload;

pub use error::PipelineError;
pub use progress::{UploadProgress, UploadStage};
pub use session::UploaderSession;
pub use store::DocumentStore;
pub use upload::UploadPipeline;
