//! Field validation shared by the form controller and the HTTP layer.

/// Symbols the password policy accepts.
pub const PASSWORD_SYMBOLS: &str = "@$!%*?&";

pub const AADHAR_LEN: usize = 12;
pub const PHONE_LEN: usize = 10;

/// True when `s` is exactly `len` ASCII digits.
pub fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

/// Keeps only digits and caps the length; applied to aadhaar and phone edits
/// so a field can never hold anything else.
pub fn sanitize_digits(input: &str, max_len: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(max_len).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

/// Strength shown while typing. Strong: 8+ chars with an uppercase letter, a
/// digit, and one of the accepted symbols. Medium: 6+ chars with an uppercase
/// letter and a digit.
pub fn password_strength(password: &str) -> PasswordStrength {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if password.len() >= 8 && has_upper && has_digit && has_symbol {
        PasswordStrength::Strong
    } else if password.len() >= 6 && has_upper && has_digit {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Weak
    }
}

/// The submission gate. Stricter than the indicator: every character must
/// come from the accepted alphabet.
pub fn is_strong_password(password: &str) -> bool {
    password_strength(password) == PasswordStrength::Strong
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(c))
}
