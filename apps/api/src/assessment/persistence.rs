//! Persistence collaborator for assessment submissions. The pipeline calls
//! it once per submission and once per session restore — no retries, no
//! caching. One row per email: a new submission replaces the previous one
//! (`assessments.email` is UNIQUE).

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::assessment::AssessmentRow;
use crate::models::profile::Profile;
use crate::models::recommendation::Recommendation;

/// Storage interface for assessment history, keyed by email.
///
/// Carried in `AppState` as `Arc<dyn AssessmentStore>` so handlers never
/// depend on the concrete backend.
#[async_trait]
pub trait AssessmentStore: Send + Sync {
    async fn save(
        &self,
        email: &str,
        profile: &Profile,
        recommendations: &[Recommendation],
    ) -> Result<()>;

    async fn load_latest(&self, email: &str) -> Result<Option<AssessmentRow>>;
}

pub struct PgAssessmentStore {
    pool: PgPool,
}

impl PgAssessmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssessmentStore for PgAssessmentStore {
    async fn save(
        &self,
        email: &str,
        profile: &Profile,
        recommendations: &[Recommendation],
    ) -> Result<()> {
        let profile_value =
            serde_json::to_value(profile).context("Failed to serialize profile")?;
        let recommendations_value = serde_json::to_value(recommendations)
            .context("Failed to serialize recommendations")?;

        sqlx::query(
            r#"
            INSERT INTO assessments (id, email, profile, recommendations, assessment_date)
            VALUES ($1, $2, $3, $4, NOW())
            ON CONFLICT (email) DO UPDATE
            SET profile = EXCLUDED.profile,
                recommendations = EXCLUDED.recommendations,
                assessment_date = NOW()
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(&profile_value)
        .bind(&recommendations_value)
        .execute(&self.pool)
        .await
        .context("Failed to upsert assessment")?;

        Ok(())
    }

    async fn load_latest(&self, email: &str) -> Result<Option<AssessmentRow>> {
        let row: Option<AssessmentRow> =
            sqlx::query_as("SELECT * FROM assessments WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .context("Failed to load assessment")?;

        Ok(row)
    }
}
