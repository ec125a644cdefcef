// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Fixed message for both unknown-email and wrong-password logins so a caller
/// cannot probe which accounts exist.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("MongoDB error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{INVALID_CREDENTIALS}")]
    InvalidCredentials,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Provider(String),

    #[error("OTP provider request failed: {0}")]
    HttpClient(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Database(e) => {
                tracing::error!("database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AppError::HttpClient(e) => {
                tracing::error!("provider request error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS.to_string())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Provider(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("internal error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpClient(err.to_string())
    }
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn provider(msg: impl Into<String>) -> Self {
        AppError::Provider(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
