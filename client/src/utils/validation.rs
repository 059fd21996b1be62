//! Validation utilities for the login and signup forms

use crate::core::error::FieldErrors;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_NAME_LEN: usize = 2;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Record the error, if any, under `field`.
    pub fn record(self, field: &'static str, errors: &mut FieldErrors) {
        if let Some(message) = self.error {
            errors.add(field, message);
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || email.chars().any(char::is_whitespace) {
        return ValidationResult::err("Invalid email format");
    }

    let domain = parts[1];
    if domain.is_empty()
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
    {
        return ValidationResult::err("Invalid email format");
    }

    ValidationResult::ok()
}

/// Validate password length
pub fn validate_password(password: &str) -> ValidationResult {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return ValidationResult::err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }

    ValidationResult::ok()
}

/// Validate display name length
pub fn validate_name(name: &str) -> ValidationResult {
    if name.chars().count() < MIN_NAME_LEN {
        return ValidationResult::err(format!("Name must be at least {} characters", MIN_NAME_LEN));
    }

    ValidationResult::ok()
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> ValidationResult {
    if password != confirmation {
        return ValidationResult::err("Passwords do not match");
    }

    ValidationResult::ok()
}
