use super::document::DocumentDetails;
use super::role::UploadRole;

/// Immutable input to the upload pipeline.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub data: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
    pub details: DocumentDetails,
    pub upload_role: UploadRole,
}

impl UploadRequest {
    pub fn file_size(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::DocumentDetails;

    fn request(file_name: &str) -> UploadRequest {
        UploadRequest {
            data: b"%PDF-1.4\n".to_vec(),
            file_name: file_name.to_string(),
            content_type: "application/pdf".to_string(),
            details: DocumentDetails {
                college_name: "Example".to_string(),
                college_address: "Addr".to_string(),
                institution_details: None,
                branch: "CS".to_string(),
                year_of_study: "1".to_string(),
                academic_year: "2025-2026".to_string(),
                subject_name: "Maths".to_string(),
                chapter: "1".to_string(),
                description: None,
            },
            upload_role: UploadRole::Student,
        }
    }

    #[test]
    fn test_file_size() {
        assert_eq!(request("a.pdf").file_size(), 9);
    }
}
