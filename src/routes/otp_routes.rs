use axum::{routing::post, Router};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/check-phone", post(crate::handlers::otp::check_phone))
        .route("/send-otp", post(crate::handlers::otp::send_otp))
        .route("/verify-otp", post(crate::handlers::otp::verify_otp))
}
