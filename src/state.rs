use std::sync::Arc;

use mongodb::Database;

use crate::services::otp_gateway::OtpGateway;
use crate::services::user_service::UserService;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub users: UserService,
    pub otp_gateway: Arc<OtpGateway>,
}

impl AppState {
    pub fn new(db: Database, otp_gateway: OtpGateway) -> Self {
        AppState {
            users: UserService::new(db.clone()),
            db,
            otp_gateway: Arc::new(otp_gateway),
        }
    }
}
