use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::user::{NewUser, UserSummary};

// Absent keys deserialize to empty strings so the handler can answer with the
// contract's own "Missing required fields" message instead of a decode error.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterRequest {
    #[validate(length(min = 1))]
    pub official_email: String,

    #[validate(length(min = 1))]
    pub aadhar_card: String,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1))]
    pub course: String,

    #[validate(length(min = 1))]
    pub phone_number: String,

    #[validate(length(min = 1))]
    pub new_password: String,
}

impl From<RegisterRequest> for NewUser {
    fn from(req: RegisterRequest) -> Self {
        NewUser {
            official_email: req.official_email,
            aadhar_card: req.aadhar_card,
            name: req.name,
            course: req.course,
            phone_number: req.phone_number,
            password: req.new_password,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginRequest {
    pub official_email: String,
    pub password: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhoneRequest {
    pub phone_number: String,
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1))]
    pub session_id: String,

    #[validate(length(min = 1))]
    pub otp: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse { message: message.into() }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResponse {
    pub message: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyOtpResponse {
    pub verified: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn register_request_uses_wire_names() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "officialEmail": "a@x.com",
            "aadharCard": "123456789012",
            "name": "A",
            "course": "CS",
            "phoneNumber": "9876543210",
            "newPassword": "Abc123!@",
        }))
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.aadhar_card, "123456789012");
        assert_eq!(req.new_password, "Abc123!@");
    }

    #[test]
    fn blank_fields_fail_validation() {
        let req: RegisterRequest = serde_json::from_value(json!({
            "officialEmail": "a@x.com",
            "aadharCard": "",
            "name": "A",
            "course": "CS",
            "phoneNumber": "9876543210",
            "newPassword": "Abc123!@",
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn missing_keys_deserialize_to_blanks_and_fail_validation() {
        let req: RegisterRequest =
            serde_json::from_value(json!({ "officialEmail": "a@x.com" })).unwrap();
        assert!(req.validate().is_err());
        assert!(req.aadhar_card.is_empty());

        let req: VerifyOtpRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.validate().is_err());

        // A login body missing a key still decodes; the blank email then falls
        // through the normal lookup to the undifferentiated 401.
        let req: LoginRequest =
            serde_json::from_value(json!({ "officialEmail": "a@x.com" })).unwrap();
        assert_eq!(req.official_email, "a@x.com");
        assert!(req.password.is_empty());
    }

    #[test]
    fn send_otp_response_serializes_session_id() {
        let value = serde_json::to_value(SendOtpResponse {
            message: "OTP sent successfully!".into(),
            session_id: "abc-123".into(),
        })
        .unwrap();

        assert_eq!(value["sessionId"], "abc-123");
    }
}
