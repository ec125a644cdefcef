pub mod auth;
pub mod otp_routes;
