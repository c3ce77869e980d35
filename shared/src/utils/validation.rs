//! Input validation helpers for emails and passwords.
//!
//! Both the request DTOs and the domain services use these checks, so they
//! live here rather than in either layer.

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email regex is valid")
});

/// Returns true if the string looks like a valid email address.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Returns true if the password meets the strength policy: at least
/// [`MIN_PASSWORD_LENGTH`] characters with at least one letter, one digit,
/// and one special character.
pub fn is_strong_password(password: &str) -> bool {
    if password.len() < MIN_PASSWORD_LENGTH {
        return false;
    }
    let has_letter = password.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| "@$!%*#?&".contains(c));
    has_letter && has_digit && has_special
}
