pub mod otp_gateway;
pub mod user_service;
