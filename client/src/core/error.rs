//! # Common Error Types
//!
//! Consolidated error handling for the client application.
//!
//! This module provides a centralized error type [`AppError`] for everything
//! that is *not* absorbed by the fail-soft façade: configuration, the session
//! store, and form validation. Transport failures have their own flat type,
//! [`crate::services::api::TransportError`], and never escape the façade.
//!
//! ## Error Categories
//!
//! - **Api**: Misuse of the API layer outside the fail-soft path (e.g. an
//!   unreadable upload file)
//! - **Session**: Session store I/O or encoding failures
//! - **Config**: Invalid or missing configuration
//! - **Validation**: Form validation failures, with per-field messages
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use lms_client::core::error::AppError;
//!
//! fn require_course_id(id: &str) -> Result<&str, AppError> {
//!     if id.is_empty() {
//!         return Err(AppError::Config("course id must not be empty".to_string()));
//!     }
//!     Ok(id)
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

/// Field-level validation messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message per field wins.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> std::result::Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

/// Application-wide error type for failures outside the fail-soft façade.
#[derive(Debug, Error)]
pub enum AppError {
    /// API layer misuse that cannot be turned into a fallback.
    #[error("API error: {0}")]
    Api(String),

    /// Session store read/write failure.
    ///
    /// The façade logs and ignores these on token writes; only explicit
    /// store operations surface them.
    #[error("Session error: {0}")]
    Session(String),

    /// Configuration loading or validation failure.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Form validation failure, one message per offending field.
    #[error("Validation error: {0}")]
    Validation(FieldErrors),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<FieldErrors> for AppError {
    fn from(errors: FieldErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Session(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Session(format!("JSON error: {}", err))
    }
}
