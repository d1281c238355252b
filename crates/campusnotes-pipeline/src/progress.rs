//! Upload progress reporting.

/// Stage of an upload run.
///
/// Stages advance linearly; there are no back edges. `Error` is reachable
/// from any non-terminal stage, `Complete` only from `Saving`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Idle,
    Extracting,
    Uploading,
    Summarizing,
    Saving,
    Complete,
    Error,
}

impl UploadStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            UploadStage::Idle => "idle",
            UploadStage::Extracting => "extracting",
            UploadStage::Uploading => "uploading",
            UploadStage::Summarizing => "summarizing",
            UploadStage::Saving => "saving",
            UploadStage::Complete => "complete",
            UploadStage::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStage::Complete | UploadStage::Error)
    }
}

/// Snapshot of where an upload run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub stage: UploadStage,
    pub percent: u8,
}

impl UploadProgress {
    pub fn idle() -> Self {
        UploadProgress {
            stage: UploadStage::Idle,
            percent: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_stages() {
        assert!(UploadStage::Complete.is_terminal());
        assert!(UploadStage::Error.is_terminal());
        assert!(!UploadStage::Saving.is_terminal());
        assert!(!UploadStage::Idle.is_terminal());
    }

    #[test]
    fn test_idle_snapshot() {
        let p = UploadProgress::idle();
        assert_eq!(p.stage, UploadStage::Idle);
        assert_eq!(p.percent, 0);
    }
}
