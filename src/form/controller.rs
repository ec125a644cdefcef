//! Registration form controller, written as a pure reducer.
//!
//! The host UI feeds [`FormEvent`]s in (edits, button presses, network
//! outcomes, one [`FormEvent::Tick`] per second) and performs whatever
//! [`Command`] the reducer emits. All timer and counter state lives in
//! [`FormState`]; nothing is ambient, so every gating rule is testable by
//! asserting that a rejected transition emits no command.

use crate::form::validation::{
    is_digits, is_strong_password, password_strength, sanitize_digits, PasswordStrength,
    AADHAR_LEN, PHONE_LEN,
};

/// Total OTP sends allowed for one form session. Reaching it disables the
/// send button for good; only reloading the form resets it.
pub const MAX_RESEND: u32 = 3;

/// Ticks the send button stays disabled after a successful send.
pub const RESEND_COOLDOWN_TICKS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    OtpSent,
    OtpVerified,
    Submitting,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    OfficialEmail,
    AadharCard,
    Name,
    Course,
    PhoneNumber,
    NewPassword,
    ConfirmPassword,
    Otp,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub official_email: String,
    pub aadhar_card: String,
    pub name: String,
    pub course: String,
    pub phone_number: String,
    pub new_password: String,
    pub confirm_password: String,
    pub otp: String,

    pub status: FormStatus,
    pub session_id: Option<String>,
    pub password_strength: Option<PasswordStrength>,

    /// Ticks left before resend is allowed again.
    pub cooldown: u32,
    /// Sends used so far, capped at [`MAX_RESEND`].
    pub resend_count: u32,

    /// Last user-visible prompt. Replaced, never appended.
    pub message: Option<String>,
}

impl FormState {
    pub fn can_send_otp(&self) -> bool {
        self.cooldown == 0 && self.resend_count < MAX_RESEND
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    FieldChanged(Field, String),
    /// Send (or resend) button pressed.
    SendOtp,
    /// Backend confirmed the send and returned the provider session.
    OtpSent { session_id: String },
    /// Backend rejected the send; carries the backend message.
    OtpSendFailed { message: String },
    /// Verify button pressed.
    VerifyOtp,
    OtpVerified,
    /// Provider says the code is wrong or expired.
    OtpRejected,
    /// Verify call itself failed.
    OtpVerifyFailed,
    /// Register button pressed.
    Submit,
    SubmitSucceeded,
    /// Registration rejected; carries the backend message.
    SubmitFailed { message: String },
    /// One cooldown time unit elapsed.
    Tick,
}

/// Network effect requested by the reducer; the host performs it and reports
/// the outcome back as an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Gate on `/check-phone`, then `/send-otp`.
    CheckPhoneAndSendOtp { phone_number: String },
    /// `/verify-otp`.
    VerifyOtp { session_id: String, otp: String },
    /// `/register`.
    SubmitRegistration(RegistrationPayload),
}

/// Wire payload for `POST /register`.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationPayload {
    pub official_email: String,
    pub aadhar_card: String,
    pub name: String,
    pub course: String,
    pub phone_number: String,
    pub new_password: String,
}

pub fn reduce(mut state: FormState, event: FormEvent) -> (FormState, Option<Command>) {
    match event {
        FormEvent::FieldChanged(field, value) => {
            apply_edit(&mut state, field, value);
            (state, None)
        }

        FormEvent::SendOtp => {
            if state.phone_number.is_empty() {
                state.message = Some("Please enter your phone number first.".to_string());
                return (state, None);
            }
            if state.resend_count >= MAX_RESEND {
                state.message = Some(format!(
                    "You have reached the maximum of {} resend attempts. \
                     Try again later or contact support.",
                    MAX_RESEND
                ));
                return (state, None);
            }
            if state.cooldown > 0 {
                state.message = Some("Please wait before requesting another OTP.".to_string());
                return (state, None);
            }
            if !is_digits(&state.phone_number, PHONE_LEN) {
                state.message =
                    Some("Invalid phone number: must be exactly 10 digits.".to_string());
                return (state, None);
            }

            let command = Command::CheckPhoneAndSendOtp {
                phone_number: state.phone_number.clone(),
            };
            (state, Some(command))
        }

        FormEvent::OtpSent { session_id } => {
            state.session_id = Some(session_id);
            state.status = FormStatus::OtpSent;
            // A fresh code invalidates any earlier verification and input.
            state.otp.clear();
            state.resend_count += 1;
            state.cooldown = RESEND_COOLDOWN_TICKS;
            state.message = Some("OTP sent. Please check your phone.".to_string());
            (state, None)
        }

        FormEvent::OtpSendFailed { message } => {
            state.message = Some(if message.contains("registered") {
                "This phone number is already registered. Use a different number or login."
                    .to_string()
            } else {
                "Failed to send OTP. Please try again.".to_string()
            });
            (state, None)
        }

        FormEvent::VerifyOtp => {
            if state.status != FormStatus::OtpSent {
                state.message =
                    Some("Request an OTP before trying to verify one.".to_string());
                return (state, None);
            }
            if state.otp.is_empty() {
                state.message = Some("Please enter the OTP received.".to_string());
                return (state, None);
            }
            let Some(session_id) = state.session_id.clone() else {
                state.message = Some("Please enter your phone number first.".to_string());
                return (state, None);
            };

            let command = Command::VerifyOtp {
                session_id,
                otp: state.otp.clone(),
            };
            (state, Some(command))
        }

        FormEvent::OtpVerified => {
            state.status = FormStatus::OtpVerified;
            state.message = Some("Phone verified successfully!".to_string());
            (state, None)
        }

        FormEvent::OtpRejected => {
            state.message = Some("Invalid OTP. Please try again.".to_string());
            (state, None)
        }

        FormEvent::OtpVerifyFailed => {
            state.message = Some("Failed to verify OTP. Please try again.".to_string());
            (state, None)
        }

        FormEvent::Submit => match submit_blocker(&state) {
            Some(message) => {
                state.message = Some(message);
                (state, None)
            }
            None => {
                state.status = FormStatus::Submitting;
                let command = Command::SubmitRegistration(RegistrationPayload {
                    official_email: state.official_email.clone(),
                    aadhar_card: state.aadhar_card.clone(),
                    name: state.name.clone(),
                    course: state.course.clone(),
                    phone_number: state.phone_number.clone(),
                    new_password: state.new_password.clone(),
                });
                (state, Some(command))
            }
        },

        FormEvent::SubmitSucceeded => {
            // Fields reset for the next visitor; only the status and the
            // confirmation prompt survive.
            let done = FormState {
                status: FormStatus::Done,
                message: Some("Registration successful!".to_string()),
                ..FormState::default()
            };
            (done, None)
        }

        FormEvent::SubmitFailed { message } => {
            // The phone is still verified; only the submission failed.
            state.status = FormStatus::OtpVerified;
            state.message = Some(map_submit_error(&message));
            (state, None)
        }

        FormEvent::Tick => {
            state.cooldown = state.cooldown.saturating_sub(1);
            (state, None)
        }
    }
}

fn apply_edit(state: &mut FormState, field: Field, value: String) {
    match field {
        Field::OfficialEmail => state.official_email = value,
        Field::AadharCard => state.aadhar_card = sanitize_digits(&value, AADHAR_LEN),
        Field::Name => state.name = value,
        Field::Course => state.course = value,
        Field::PhoneNumber => state.phone_number = sanitize_digits(&value, PHONE_LEN),
        Field::NewPassword => {
            state.password_strength = if value.is_empty() {
                None
            } else {
                Some(password_strength(&value))
            };
            state.new_password = value;
        }
        Field::ConfirmPassword => state.confirm_password = value,
        Field::Otp => state.otp = value,
    }
}

/// Returns the first reason submission must be blocked, checked in the same
/// order the original form prompts. `None` means the submit may proceed.
fn submit_blocker(state: &FormState) -> Option<String> {
    if state.status != FormStatus::OtpVerified {
        return Some("Please verify your phone number before registering.".to_string());
    }
    if state.confirm_password != state.new_password {
        return Some("Passwords do not match".to_string());
    }
    if !is_digits(&state.aadhar_card, AADHAR_LEN) {
        return Some("Invalid Aadhar number: must be exactly 12 digits.".to_string());
    }
    if !is_digits(&state.phone_number, PHONE_LEN) {
        return Some("Invalid phone number: must be exactly 10 digits.".to_string());
    }
    if !is_strong_password(&state.new_password) {
        return Some(
            "Password must be at least 8 characters long, contain one uppercase \
             letter, one number, and one special character."
                .to_string(),
        );
    }
    None
}

/// Friendlier prompts for the backend messages the form knows about. Anything
/// unrecognized becomes a generic failure instead of leaking raw detail.
fn map_submit_error(message: &str) -> String {
    if message.contains("Aadhaar") {
        "This Aadhaar card is already registered. Please login instead.".to_string()
    } else if message.contains("Phone") {
        "This phone number is already registered. Please login instead.".to_string()
    } else if message.contains("email") {
        "This email is already registered. Try logging in.".to_string()
    } else {
        "Error connecting to server. Please try again.".to_string()
    }
}
