//! CampusNotes Storage Library
//!
//! This crate provides storage abstraction and implementations for CampusNotes.
//! It includes the Storage trait and implementations for S3 and local filesystem.
//!
//! # Storage key format
//!
//! Uploaded documents are stored under a human-navigable hierarchy derived from
//! the academic metadata:
//!
//! `{college}/{branch}/{year-of-study}/{subject}/{unix_millis}-{suffix}.{ext}`
//!
//! Path segments are slugged (lower-cased, whitespace hyphenated) and the leaf
//! filename carries a timestamp plus a random suffix to avoid collisions. Keys
//! must not contain `..` or a leading `/`. Key generation is centralized in the
//! `keys` module so all backends stay consistent.
//!
//! Backends never overwrite: uploading to an existing key is an error.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use campusnotes_core::StorageBackend;
pub use factory::create_storage;
pub use keys::{document_storage_key, random_suffix, unique_leaf_name};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
