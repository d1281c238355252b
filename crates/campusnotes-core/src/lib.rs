//! CampusNotes Core Library
//!
//! This crate provides core domain models, error types, configuration, and validation
//! that are shared across all CampusNotes components.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use storage_types::StorageBackend;
pub use validation::{UploadValidator, ValidationError};
