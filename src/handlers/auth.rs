use axum::extract::{Path, State};
use axum::response::Json;
use validator::Validate;

use crate::dtos::auth_dtos::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest};
use crate::errors::{AppError, Result};
use crate::models::user::UserProfile;
use crate::state::AppState;

pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<MessageResponse>> {
    if payload.validate().is_err() {
        return Err(AppError::validation("Missing required fields"));
    }

    state.users.register(payload.into()).await?;

    Ok(Json(MessageResponse::new("Registration successful!")))
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = state
        .users
        .login(&payload.official_email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user,
    }))
}

pub async fn get_admin(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<UserProfile>> {
    let profile = state.users.find_by_email(&email).await?;
    Ok(Json(profile))
}
