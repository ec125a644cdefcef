// config.rs
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub database_name: String,
    pub two_factor_api_key: String,
    pub otp_template: String,
    pub port: u16,
    pub host: String,
}

impl AppConfig {
    /// Reads the process environment; `main` loads `.env` beforehand.
    pub fn from_env() -> Self {
        AppConfig {
            database_url: env::var("MONGODB_URI").expect("MONGODB_URI must be set"),
            database_name: env::var("MONGODB_DATABASE")
                .unwrap_or_else(|_| "voterauth".to_string()),
            two_factor_api_key: env::var("TWO_FACTOR_API_KEY")
                .expect("TWO_FACTOR_API_KEY must be set"),
            otp_template: env::var("OTP_TEMPLATE")
                .unwrap_or_else(|_| "Fincrypt_Verification".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5001".to_string())
                .parse()
                .expect("PORT must be a number"),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        }
    }
}
