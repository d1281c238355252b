//! Configuration module
//!
//! This module provides the application configuration, loaded from the
//! environment with sensible defaults for everything except the database
//! connection and the selected storage backend's settings.

use std::env;

use crate::constants::{
    MAX_DOCUMENT_SIZE_BYTES, POINTS_PER_UPLOAD, SUMMARY_INPUT_LIMIT_CHARS, SUMMARY_MAX_TOKENS,
};
use crate::storage_types::StorageBackend;

const DEFAULT_SUMMARIZER_MODEL: &str = "google/gemini-3-flash-preview";
const DEFAULT_SUMMARIZER_TIMEOUT_SECS: u64 = 120;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub environment: String,
    pub database_url: String,
    pub db_max_connections: u32,
    // Storage configuration
    pub storage_backend: Option<StorageBackend>,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, etc.)
    pub aws_region: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Upload configuration
    pub max_document_size_bytes: usize,
    pub points_per_upload: i64,
    // Summarizer configuration
    pub summarizer_api_url: Option<String>,
    pub summarizer_api_key: Option<String>,
    pub summarizer_model: String,
    pub summarizer_timeout_secs: u64,
    pub summary_input_limit_chars: usize,
    pub summary_max_tokens: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let storage_backend = env::var("STORAGE_BACKEND")
            .ok()
            .map(|s| s.parse::<StorageBackend>())
            .transpose()?;

        let max_document_size_mb = env::var("MAX_DOCUMENT_SIZE_MB")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());

        Ok(Config {
            environment,
            database_url,
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| DEFAULT_DB_MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok(),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            aws_region: env::var("AWS_REGION").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            max_document_size_bytes: max_document_size_mb
                .map(|mb| mb * 1024 * 1024)
                .unwrap_or(MAX_DOCUMENT_SIZE_BYTES),
            points_per_upload: env::var("POINTS_PER_UPLOAD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(POINTS_PER_UPLOAD),
            summarizer_api_url: env::var("SUMMARIZER_API_URL").ok(),
            summarizer_api_key: env::var("SUMMARIZER_API_KEY").ok(),
            summarizer_model: env::var("SUMMARIZER_MODEL")
                .unwrap_or_else(|_| DEFAULT_SUMMARIZER_MODEL.to_string()),
            summarizer_timeout_secs: env::var("SUMMARIZER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SUMMARIZER_TIMEOUT_SECS),
            summary_input_limit_chars: env::var("SUMMARY_INPUT_LIMIT_CHARS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(SUMMARY_INPUT_LIMIT_CHARS),
            summary_max_tokens: env::var("SUMMARY_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(SUMMARY_MAX_TOKENS),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Whether the summarizer is configured; without an endpoint the
    /// pipeline skips the summarization step entirely.
    pub fn summarizer_configured(&self) -> bool {
        self.summarizer_api_url.is_some() && self.summarizer_api_key.is_some()
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_document_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_DOCUMENT_SIZE_MB must be non-zero"));
        }

        match self.storage_backend {
            Some(StorageBackend::S3) => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_BUCKET must be set when STORAGE_BACKEND=s3"
                    ));
                }
                if self.s3_region.is_none() && self.aws_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set when STORAGE_BACKEND=s3"
                    ));
                }
            }
            Some(StorageBackend::Local) => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set when STORAGE_BACKEND=local"
                    ));
                }
                if self.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be set when STORAGE_BACKEND=local"
                    ));
                }
            }
            None => {}
        }

        if self.summarizer_api_url.is_some() != self.summarizer_api_key.is_some() {
            return Err(anyhow::anyhow!(
                "SUMMARIZER_API_URL and SUMMARIZER_API_KEY must be set together"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> Config {
        Config {
            environment: "development".to_string(),
            database_url: "postgres://localhost/campusnotes".to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            storage_backend: None,
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            aws_region: None,
            local_storage_path: None,
            local_storage_base_url: None,
            max_document_size_bytes: MAX_DOCUMENT_SIZE_BYTES,
            points_per_upload: POINTS_PER_UPLOAD,
            summarizer_api_url: None,
            summarizer_api_key: None,
            summarizer_model: DEFAULT_SUMMARIZER_MODEL.to_string(),
            summarizer_timeout_secs: DEFAULT_SUMMARIZER_TIMEOUT_SECS,
            summary_input_limit_chars: SUMMARY_INPUT_LIMIT_CHARS,
            summary_max_tokens: SUMMARY_MAX_TOKENS,
        }
    }

    #[test]
    fn test_validate_ok_without_backend() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn test_validate_s3_requires_bucket_and_region() {
        let mut config = base_config();
        config.storage_backend = Some(StorageBackend::S3);
        assert!(config.validate().is_err());

        config.s3_bucket = Some("campusnotes-documents".to_string());
        assert!(config.validate().is_err());

        config.s3_region = Some("eu-west-1".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_local_requires_path_and_url() {
        let mut config = base_config();
        config.storage_backend = Some(StorageBackend::Local);
        assert!(config.validate().is_err());

        config.local_storage_path = Some("/var/lib/campusnotes".to_string());
        config.local_storage_base_url = Some("http://localhost:3000/documents".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_summarizer_pairing() {
        let mut config = base_config();
        config.summarizer_api_url = Some("https://ai.example.com/v1".to_string());
        assert!(config.validate().is_err());
        assert!(!config.summarizer_configured());

        config.summarizer_api_key = Some("key".to_string());
        assert!(config.validate().is_ok());
        assert!(config.summarizer_configured());
    }

    #[test]
    fn test_is_production() {
        let mut config = base_config();
        assert!(!config.is_production());
        config.environment = "Production".to_string();
        assert!(config.is_production());
    }
}
