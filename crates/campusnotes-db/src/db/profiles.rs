//! Profile repository: uploader identity and point balances.

use campusnotes_core::models::Profile;
use campusnotes_core::AppError;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

/// Repository for the profiles table.
#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch a profile by id.
    #[tracing::instrument(skip(self), fields(db.table = "profiles"))]
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Profile>, AppError> {
        let profile: Option<Profile> = sqlx::query_as::<Postgres, Profile>(
            "SELECT * FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    /// Set a profile's point balance to `new_total` and return it, or `None`
    /// when no such profile exists. The caller computes the new total from
    /// the balance it read at session start.
    #[tracing::instrument(skip(self), fields(db.table = "profiles"))]
    pub async fn update_points(&self, id: Uuid, new_total: i64) -> Result<Option<i64>, AppError> {
        let points: Option<(i64,)> = sqlx::query_as::<Postgres, (i64,)>(
            r#"
            UPDATE profiles
            SET points = $2, updated_at = now()
            WHERE id = $1
            RETURNING points
            "#,
        )
        .bind(id)
        .bind(new_total)
        .fetch_optional(&self.pool)
        .await?;

        Ok(points.map(|(p,)| p))
    }
}
