pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers as assessment_handlers;
use crate::auth::handlers as auth_handlers;
use crate::catalog::handlers as catalog_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/v1/auth/signup", post(auth_handlers::handle_signup))
        .route("/api/v1/auth/login", post(auth_handlers::handle_login))
        // Assessment + recommendations
        .route(
            "/api/v1/assessments",
            post(assessment_handlers::handle_submit_assessment),
        )
        .route(
            "/api/v1/assessments/latest",
            get(assessment_handlers::handle_latest_assessment),
        )
        // Read-only catalog
        .route("/api/v1/roles", get(catalog_handlers::handle_list_roles))
        .route(
            "/api/v1/catalog/paths",
            get(catalog_handlers::handle_career_paths),
        )
        .route(
            "/api/v1/catalog/skills",
            get(catalog_handlers::handle_skill_categories),
        )
        .route(
            "/api/v1/catalog/fields/:field",
            get(catalog_handlers::handle_field_options),
        )
        .with_state(state)
}
