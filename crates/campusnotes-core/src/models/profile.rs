use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Uploader profile projection supplied by the auth collaborator.
///
/// The pipeline only reads the identity and the current point balance;
/// everything else is display data for the leaderboard views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Profile {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub role: Option<String>,
    pub college_name: Option<String>,
    pub points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
