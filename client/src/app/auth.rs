//! # Login and Signup Forms
//!
//! Forms are validated field by field before anything is sent. Invalid input
//! is reported as [`AppError::Validation`]; valid input goes to the service,
//! whose outcome is always usable (live or fixture credentials).

use shared::AuthSession;

use crate::core::{AppError, FieldErrors, LmsService, Result};
use crate::services::api::Outcome;
use crate::utils::validation::{
    validate_email, validate_name, validate_password, validate_password_confirmation,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> std::result::Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        validate_email(self.email.trim()).record("email", &mut errors);
        validate_password(&self.password).record("password", &mut errors);
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> std::result::Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        validate_name(self.name.trim()).record("name", &mut errors);
        validate_email(self.email.trim()).record("email", &mut errors);
        validate_password(&self.password).record("password", &mut errors);
        validate_password_confirmation(&self.password, &self.confirm_password)
            .record("confirmPassword", &mut errors);
        errors.into_result()
    }
}

/// Validate and log in.
pub async fn submit_login<S>(service: &S, form: &LoginForm) -> Result<Outcome<AuthSession>>
where
    S: LmsService + ?Sized,
{
    form.validate().map_err(|errors| {
        tracing::debug!(%errors, "Login form rejected");
        AppError::Validation(errors)
    })?;

    Ok(service.login(form.email.trim(), &form.password).await)
}

/// Validate and sign up.
pub async fn submit_signup<S>(service: &S, form: &SignupForm) -> Result<Outcome<AuthSession>>
where
    S: LmsService + ?Sized,
{
    form.validate().map_err(|errors| {
        tracing::debug!(%errors, "Signup form rejected");
        AppError::Validation(errors)
    })?;

    Ok(service
        .signup(form.name.trim(), form.email.trim(), &form.password)
        .await)
}
