//! Domain models shared across CampusNotes components.

pub mod document;
pub mod profile;
pub mod role;
pub mod summary;
pub mod upload;

pub use document::{DocumentDetails, DocumentRecord, DocumentResponse, NewDocument};
pub use profile::Profile;
pub use role::{UploadRole, VerificationStatus};
pub use summary::SummaryResult;
pub use upload::UploadRequest;
