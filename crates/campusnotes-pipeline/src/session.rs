//! Uploader session snapshot.

use uuid::Uuid;

/// Identity and point balance of the uploader, captured at session start.
///
/// `points` is `None` when the balance could not be loaded; the pipeline
/// then skips the point award rather than guessing a total.
#[derive(Debug, Clone, Copy)]
pub struct UploaderSession {
    pub user_id: Uuid,
    pub points: Option<i64>,
}

impl UploaderSession {
    pub fn new(user_id: Uuid, points: Option<i64>) -> Self {
        Self { user_id, points }
    }
}
