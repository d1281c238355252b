//! Postgres persistence for CampusNotes.

pub mod db;

pub use db::{setup_database, DocumentRepository, DocumentRow, PgDocumentStore, ProfileRepository};
