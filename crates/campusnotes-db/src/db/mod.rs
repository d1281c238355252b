//! Database repositories for the data access layer.
//!
//! Each repository owns one table and exposes the queries the upload
//! pipeline and listing views need. Rows are plain FromRow structs that
//! convert into the domain models from campusnotes-core on the way out.

pub mod documents;
pub mod pool;
pub mod profiles;
pub mod store;

pub use documents::{DocumentRepository, DocumentRow};
pub use pool::setup_database;
pub use profiles::ProfileRepository;
pub use store::PgDocumentStore;
