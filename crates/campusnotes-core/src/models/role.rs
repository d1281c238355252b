use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Role declared by the uploader at submission time.
///
/// The role drives the document's verification state: lecturer and owner
/// uploads are treated as institutionally endorsed from the moment they
/// are created, student uploads are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadRole {
    Student,
    Lecturer,
    Owner,
}

/// Verification state derived from the upload role.
///
/// Computed exactly once at submission; the pipeline never mutates it
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationStatus {
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
}

impl UploadRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadRole::Student => "student",
            UploadRole::Lecturer => "lecturer",
            UploadRole::Owner => "owner",
        }
    }

    /// Derive the verification status for this role.
    ///
    /// Total and pure: student maps to unverified with no timestamp,
    /// lecturer and owner map to verified at `now`.
    pub fn verification(&self, now: DateTime<Utc>) -> VerificationStatus {
        match self {
            UploadRole::Student => VerificationStatus {
                is_verified: false,
                verified_at: None,
            },
            UploadRole::Lecturer | UploadRole::Owner => VerificationStatus {
                is_verified: true,
                verified_at: Some(now),
            },
        }
    }
}

impl FromStr for UploadRole {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "student" => Ok(UploadRole::Student),
            "lecturer" => Ok(UploadRole::Lecturer),
            "owner" => Ok(UploadRole::Owner),
            _ => Err(anyhow::anyhow!("Invalid upload role: {}", s)),
        }
    }
}

impl Display for UploadRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}
