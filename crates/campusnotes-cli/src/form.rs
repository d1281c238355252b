//! Upload form validation.
//!
//! Mirrors the five-step submission flow: institution, academic
//! classification, subject, role, file. Steps are checked in order and the
//! first failing step is reported; later steps are not evaluated.

use std::path::{Path, PathBuf};

use campusnotes_core::models::{DocumentDetails, UploadRole};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("Institution details incomplete: {0}")]
    Institution(String),

    #[error("Academic classification incomplete: {0}")]
    Academic(String),

    #[error("Subject details incomplete: {0}")]
    Subject(String),

    #[error("Invalid role: {0}")]
    Role(String),

    #[error("File problem: {0}")]
    File(String),
}

/// All fields of an upload submission before validation.
#[derive(Debug, Clone)]
pub struct UploadForm {
    pub college_name: String,
    pub college_address: String,
    pub institution_details: Option<String>,
    pub branch: String,
    pub year_of_study: String,
    pub academic_year: String,
    pub subject_name: String,
    pub chapter: String,
    pub description: Option<String>,
    pub role: String,
    pub file: PathBuf,
}

fn require(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(())
    }
}

impl UploadForm {
    /// Validate all five steps in order, returning the parsed role on
    /// success.
    pub fn validate(&self) -> Result<UploadRole, FormError> {
        self.validate_institution()?;
        self.validate_academic()?;
        self.validate_subject()?;
        let role = self.validate_role()?;
        self.validate_file()?;
        Ok(role)
    }

    fn validate_institution(&self) -> Result<(), FormError> {
        require(&self.college_name, "college name").map_err(FormError::Institution)?;
        require(&self.college_address, "college address").map_err(FormError::Institution)?;
        Ok(())
    }

    fn validate_academic(&self) -> Result<(), FormError> {
        require(&self.branch, "branch").map_err(FormError::Academic)?;
        require(&self.year_of_study, "year of study").map_err(FormError::Academic)?;
        require(&self.academic_year, "academic year").map_err(FormError::Academic)?;
        Ok(())
    }

    fn validate_subject(&self) -> Result<(), FormError> {
        require(&self.subject_name, "subject name").map_err(FormError::Subject)?;
        require(&self.chapter, "chapter").map_err(FormError::Subject)?;
        Ok(())
    }

    fn validate_role(&self) -> Result<UploadRole, FormError> {
        self.role
            .parse::<UploadRole>()
            .map_err(|_| FormError::Role(format!("'{}' (expected student, lecturer or owner)", self.role)))
    }

    fn validate_file(&self) -> Result<(), FormError> {
        let path: &Path = &self.file;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());
        if extension.as_deref() != Some("pdf") {
            return Err(FormError::File(format!(
                "{} is not a PDF file",
                path.display()
            )));
        }
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => Ok(()),
            Ok(_) => Err(FormError::File(format!("{} is not a file", path.display()))),
            Err(e) => Err(FormError::File(format!("{}: {}", path.display(), e))),
        }
    }

    pub fn to_details(&self) -> DocumentDetails {
        DocumentDetails {
            college_name: self.college_name.clone(),
            college_address: self.college_address.clone(),
            institution_details: self.institution_details.clone(),
            branch: self.branch.clone(),
            year_of_study: self.year_of_study.clone(),
            academic_year: self.academic_year.clone(),
            subject_name: self.subject_name.clone(),
            chapter: self.chapter.clone(),
            description: self.description.clone(),
        }
    }
}
