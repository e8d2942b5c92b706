use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::recommendation::Recommendation;
use crate::recommend::career_recommendations;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentRequest {
    pub email: String,
    pub profile: Profile,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub profile: Profile,
    pub recommendations: Vec<Recommendation>,
}

/// POST /api/v1/assessments
/// Validates and normalizes the submitted profile, runs the recommendation
/// pipeline, and stores the result keyed by email. A failed save is logged
/// but never hides results the user already earned.
pub async fn handle_submit_assessment(
    State(state): State<AppState>,
    Json(req): Json<SubmitAssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AppError> {
    req.profile.validate().map_err(AppError::Validation)?;
    let profile = req.profile.normalized();

    info!(
        "Running assessment for {} ({} skills, {} interests)",
        req.email,
        profile.skills.len(),
        profile.interests.len()
    );

    let recommendations =
        career_recommendations(state.llm.as_ref(), &profile, state.jitter.as_ref()).await;

    if let Err(e) = state.store.save(&req.email, &profile, &recommendations).await {
        warn!("Failed to persist assessment for {}: {e:#}", req.email);
    }

    Ok(Json(AssessmentResponse {
        profile,
        recommendations,
    }))
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

/// GET /api/v1/assessments/latest?email=
pub async fn handle_latest_assessment(
    State(state): State<AppState>,
    Query(params): Query<EmailQuery>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let row = state
        .store
        .load_latest(&params.email)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No assessment found for {}", params.email)))?;

    let profile: Profile = serde_json::from_value(row.profile)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Corrupt stored profile: {e}")))?;
    let recommendations: Vec<Recommendation> = serde_json::from_value(row.recommendations)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Corrupt stored recommendations: {e}")))?;

    Ok(Json(AssessmentResponse {
        profile,
        recommendations,
    }))
}
