use std::sync::Arc;

use sqlx::PgPool;

use crate::assessment::persistence::AssessmentStore;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::recommend::fallback::JitterSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// None when no API key is configured — the pipeline then runs in demo
    /// mode on the fallback engine alone.
    pub llm: Option<GeminiClient>,
    pub config: Config,
    /// Assessment history collaborator, keyed by email.
    pub store: Arc<dyn AssessmentStore>,
    /// Jitter applied to displayed match percentages. Random in production;
    /// tests inject a fixed source to pin exact values.
    pub jitter: Arc<dyn JitterSource>,
}
