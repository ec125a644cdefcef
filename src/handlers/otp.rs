use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use validator::Validate;

use crate::dtos::auth_dtos::{
    MessageResponse, PhoneRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse,
};
use crate::errors::{AppError, Result};
use crate::form::validation::{is_digits, PHONE_LEN};
use crate::services::user_service::PHONE_TAKEN;
use crate::state::AppState;

/// Availability gate the form calls before asking for an OTP, so a taken
/// number never burns provider quota.
pub async fn check_phone(
    State(state): State<AppState>,
    Json(payload): Json<PhoneRequest>,
) -> Result<Json<MessageResponse>> {
    ensure_phone_available(&state, &payload.phone_number).await?;
    Ok(Json(MessageResponse::new("Phone number available")))
}

pub async fn send_otp(
    State(state): State<AppState>,
    Json(payload): Json<PhoneRequest>,
) -> Result<Json<SendOtpResponse>> {
    // The check-phone/send-otp pair is not atomic, so re-check here. A number
    // registered between the two calls is still caught before the provider
    // call; the remaining race is closed by the unique index at insert time.
    ensure_phone_available(&state, &payload.phone_number).await?;

    let session_id = state.otp_gateway.send_otp(&payload.phone_number).await?;

    Ok(Json(SendOtpResponse {
        message: "OTP sent successfully!".to_string(),
        session_id,
    }))
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(payload): Json<VerifyOtpRequest>,
) -> Result<(StatusCode, Json<VerifyOtpResponse>)> {
    if payload.validate().is_err() {
        return Err(AppError::validation("Session ID or OTP missing"));
    }

    let verified = state
        .otp_gateway
        .verify_otp(&payload.session_id, &payload.otp)
        .await?;

    let (status, message) = if verified {
        (StatusCode::OK, "OTP verified successfully!")
    } else {
        (StatusCode::BAD_REQUEST, "Invalid or expired OTP")
    };

    Ok((
        status,
        Json(VerifyOtpResponse { verified, message: message.to_string() }),
    ))
}

async fn ensure_phone_available(state: &AppState, phone_number: &str) -> Result<()> {
    if !is_digits(phone_number, PHONE_LEN) {
        return Err(AppError::validation("Invalid phone number"));
    }
    if state.users.phone_registered(phone_number).await? {
        return Err(AppError::conflict(PHONE_TAKEN));
    }
    Ok(())
}
