use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One stored assessment per email — submissions upsert, keyed by the
/// identity provider's correlation key.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AssessmentRow {
    pub id: Uuid,
    pub email: String,
    pub profile: Value,
    pub recommendations: Value,
    pub assessment_date: DateTime<Utc>,
}
