use std::path::Path;

use crate::models::UploadRequest;

/// Validation errors for uploaded documents.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Invalid file extension: {extension} (allowed: {allowed:?})")]
    InvalidExtension {
        extension: String,
        allowed: Vec<String>,
    },

    #[error("Invalid content type: {content_type} (allowed: {allowed:?})")]
    InvalidContentType {
        content_type: String,
        allowed: Vec<String>,
    },

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    #[error("Empty file")]
    EmptyFile,

    #[error("File content is not a recognized document format")]
    UnrecognizedFormat,
}

/// Upload validator
///
/// Provides validation for document uploads without coupling to storage
/// implementation details. The accepted format set is fixed to PDF; the
/// size ceiling comes from configuration.
pub struct UploadValidator {
    max_file_size: usize,
    allowed_extensions: Vec<String>,
    allowed_content_types: Vec<String>,
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self {
            max_file_size,
            allowed_extensions: vec!["pdf".to_string()],
            allowed_content_types: vec!["application/pdf".to_string()],
        }
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate file extension
    pub fn validate_extension(&self, filename: &str) -> Result<(), ValidationError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .ok_or_else(|| ValidationError::InvalidFilename(filename.to_string()))?;

        if !self.allowed_extensions.contains(&extension) {
            return Err(ValidationError::InvalidExtension {
                extension,
                allowed: self.allowed_extensions.clone(),
            });
        }

        Ok(())
    }

    /// Validate content type
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), ValidationError> {
        let normalized = content_type.to_lowercase();

        if !self
            .allowed_content_types
            .iter()
            .any(|ct| ct == &normalized)
        {
            return Err(ValidationError::InvalidContentType {
                content_type: content_type.to_string(),
                allowed: self.allowed_content_types.clone(),
            });
        }

        Ok(())
    }

    /// Validate the magic bytes of the file content.
    ///
    /// Declared extension and content type are caller-supplied and cheap
    /// to spoof; the leading `%PDF` signature is checked as well.
    pub fn validate_magic_bytes(&self, data: &[u8]) -> Result<(), ValidationError> {
        if data.len() >= 4 && &data[0..4] == b"%PDF" {
            Ok(())
        } else {
            Err(ValidationError::UnrecognizedFormat)
        }
    }

    /// Validate all aspects of an upload request.
    pub fn validate_all(&self, request: &UploadRequest) -> Result<(), ValidationError> {
        self.validate_file_size(request.file_size())?;
        self.validate_extension(&request.file_name)?;
        self.validate_content_type(&request.content_type)?;
        self.validate_magic_bytes(&request.data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentDetails, UploadRole};

    fn test_validator() -> UploadValidator {
        UploadValidator::new(1024 * 1024) // 1MB
    }

    fn test_request(file_name: &str, content_type: &str, data: Vec<u8>) -> UploadRequest {
        UploadRequest {
            data,
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            details: DocumentDetails {
                college_name: "Example".to_string(),
                college_address: "Addr".to_string(),
                institution_details: None,
                branch: "CS".to_string(),
                year_of_study: "1st Year".to_string(),
                academic_year: "2025-2026".to_string(),
                subject_name: "Maths".to_string(),
                chapter: "Limits".to_string(),
                description: None,
            },
            upload_role: UploadRole::Student,
        }
    }

    #[test]
    fn test_validate_file_size_ok() {
        let validator = test_validator();
        assert!(validator.validate_file_size(512 * 1024).is_ok());
    }

    #[test]
    fn test_validate_file_size_too_large() {
        let validator = test_validator();
        assert!(matches!(
            validator.validate_file_size(2 * 1024 * 1024),
            Err(ValidationError::FileTooLarge { .. })
        ));
    }

    #[test]
    fn test_validate_file_size_empty() {
        let validator = test_validator();
        assert!(matches!(
            validator.validate_file_size(0),
            Err(ValidationError::EmptyFile)
        ));
    }

    #[test]
    fn test_validate_extension_ok() {
        let validator = test_validator();
        assert!(validator.validate_extension("test.pdf").is_ok());
        assert!(validator.validate_extension("test.PDF").is_ok()); // case insensitive
    }

    #[test]
    fn test_validate_extension_invalid() {
        let validator = test_validator();
        assert!(validator.validate_extension("test.docx").is_err());
        assert!(validator.validate_extension("noextension").is_err());
    }

    #[test]
    fn test_validate_content_type() {
        let validator = test_validator();
        assert!(validator.validate_content_type("application/pdf").is_ok());
        assert!(validator.validate_content_type("APPLICATION/PDF").is_ok());
        assert!(validator.validate_content_type("image/png").is_err());
    }

    #[test]
    fn test_validate_magic_bytes() {
        let validator = test_validator();
        assert!(validator.validate_magic_bytes(b"%PDF-1.7\n").is_ok());
        assert!(matches!(
            validator.validate_magic_bytes(b"PK\x03\x04"),
            Err(ValidationError::UnrecognizedFormat)
        ));
        assert!(validator.validate_magic_bytes(b"%P").is_err());
    }

    #[test]
    fn test_validate_all_ok() {
        let validator = test_validator();
        let request = test_request("notes.pdf", "application/pdf", b"%PDF-1.4\n".to_vec());
        assert!(validator.validate_all(&request).is_ok());
    }

    #[test]
    fn test_validate_all_rejects_spoofed_content() {
        let validator = test_validator();
        // Declared as PDF but carries a ZIP payload
        let request = test_request("notes.pdf", "application/pdf", b"PK\x03\x04rest".to_vec());
        assert!(matches!(
            validator.validate_all(&request),
            Err(ValidationError::UnrecognizedFormat)
        ));
    }
}
