use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::user::{PublicUser, UserRow};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// Sent by the signup form; checked here so the mismatch message is
    /// consistent even for clients that skip their own check.
    pub confirm_password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<PublicUser>, AppError> {
    if req.email.trim().is_empty() || !req.email.contains('@') {
        return Err(AppError::Validation("A valid email is required".to_string()));
    }
    if req.password.is_empty() {
        return Err(AppError::Validation("Password must not be empty".to_string()));
    }
    if let Some(confirm) = &req.confirm_password {
        if confirm != &req.password {
            return Err(AppError::Validation("Passwords do not match".to_string()));
        }
    }

    let existing: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&req.email)
        .fetch_optional(&state.db)
        .await?;

    if existing.is_some() {
        return Err(AppError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let user: UserRow = sqlx::query_as(
        r#"
        INSERT INTO users (id, full_name, email, password)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.full_name)
    .bind(&req.email)
    .bind(&req.password)
    .fetch_one(&state.db)
    .await?;

    info!("Registered new user {}", user.email);
    Ok(Json(user.into()))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<PublicUser>, AppError> {
    let user: Option<UserRow> = sqlx::query_as("SELECT * FROM users WHERE email = $1")
        .bind(&req.email)
        .fetch_optional(&state.db)
        .await?;

    match user {
        Some(user) if user.password == req.password => Ok(Json(user.into())),
        _ => Err(AppError::Unauthorized("Invalid credentials".to_string())),
    }
}
