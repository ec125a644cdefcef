use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::errors::{AppError, Result};
use crate::form::validation::is_digits;

const BASE_URL: &str = "https://2factor.in/API/V1";

/// 2Factor.in wraps every reply in the same envelope: `Status` is "Success"
/// or "Error", `Details` is the session id on send and the reason otherwise.
#[derive(Debug, Deserialize)]
pub struct ProviderResponse {
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Details")]
    pub details: String,
}

impl ProviderResponse {
    fn is_success(&self) -> bool {
        self.status == "Success"
    }
}

/// Thin adapter over the 2Factor.in SMS-OTP API. The provider generates and
/// stores the code; we only carry its opaque session id.
pub struct OtpGateway {
    api_key: String,
    template: String,
    base_url: String,
    client: Client,
}

impl OtpGateway {
    pub fn new(api_key: String, template: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        OtpGateway {
            api_key,
            template,
            base_url: BASE_URL.to_string(),
            client,
        }
    }

    /// Asks the provider to generate and text a code. Returns the session id
    /// that must accompany the later verify call. Rejects a malformed phone
    /// number before any network traffic.
    pub async fn send_otp(&self, phone_number: &str) -> Result<String> {
        if !is_digits(phone_number, 10) {
            return Err(AppError::validation("Invalid phone number"));
        }

        let url = format!(
            "{}/{}/SMS/{}/AUTOGEN/{}",
            self.base_url, self.api_key, phone_number, self.template
        );

        let response: ProviderResponse = self.client.get(&url).send().await?.json().await?;

        if response.is_success() {
            Ok(response.details)
        } else {
            tracing::warn!("OTP send rejected by provider: {}", response.details);
            Err(AppError::provider(format!("Failed to send OTP: {}", response.details)))
        }
    }

    /// Checks a code against its session. A provider-side rejection (wrong or
    /// expired code) is a normal `false`, not an error; only transport
    /// failures become errors.
    pub async fn verify_otp(&self, session_id: &str, otp: &str) -> Result<bool> {
        let url = format!(
            "{}/{}/SMS/VERIFY/{}/{}",
            self.base_url, self.api_key, session_id, otp
        );

        let response: ProviderResponse = self.client.get(&url).send().await?.json().await?;

        Ok(response.is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> OtpGateway {
        OtpGateway::new("test-key".into(), "Fincrypt_Verification".into())
    }

    #[tokio::test]
    async fn malformed_phone_is_rejected_before_any_request() {
        // 9 digits, 11 digits, letters: all fail locally. A network call with
        // this dummy key would error differently, so reaching the provider
        // would break the Validation assertion.
        for phone in ["987654321", "98765432100", "98765abcde", ""] {
            let err = gateway().send_otp(phone).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "phone {:?}", phone);
        }
    }

    #[test]
    fn provider_envelope_parses_both_shapes() {
        let sent: ProviderResponse = serde_json::from_str(
            r#"{"Status":"Success","Details":"6f1f7fe7-0fbd-4dbd-a4ab-b9d3a4a5e9c2"}"#,
        )
        .unwrap();
        assert!(sent.is_success());
        assert_eq!(sent.details, "6f1f7fe7-0fbd-4dbd-a4ab-b9d3a4a5e9c2");

        let rejected: ProviderResponse =
            serde_json::from_str(r#"{"Status":"Error","Details":"OTP Expired"}"#).unwrap();
        assert!(!rejected.is_success());
    }
}
