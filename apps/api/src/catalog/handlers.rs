use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use crate::catalog::{
    interests_for_field, skill_categories_for_field, RoleCard, SkillCategory, CAREER_PATHS,
    ROLE_LIBRARY, SKILL_CATEGORIES,
};

/// GET /api/v1/roles
pub async fn handle_list_roles() -> Json<&'static [RoleCard]> {
    Json(ROLE_LIBRARY)
}

/// GET /api/v1/catalog/skills
pub async fn handle_skill_categories() -> Json<&'static [SkillCategory]> {
    Json(SKILL_CATEGORIES)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOptions {
    pub field: String,
    pub interests: &'static [&'static str],
    pub skill_categories: Vec<&'static SkillCategory>,
}

/// GET /api/v1/catalog/fields/:field
/// Assessment form options for one study field. Unknown fields resolve to
/// the full option set rather than 404 — the form always has something to show.
pub async fn handle_field_options(Path(field): Path<String>) -> Json<FieldOptions> {
    Json(FieldOptions {
        interests: interests_for_field(&field),
        skill_categories: skill_categories_for_field(&field),
        field,
    })
}

/// GET /api/v1/catalog/paths
/// The candidate roles the fallback engine ranks — exposed read-only so the
/// client can explain where demo-mode recommendations come from.
pub async fn handle_career_paths() -> Json<&'static [crate::catalog::CandidateRole]> {
    Json(CAREER_PATHS)
}
