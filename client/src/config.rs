//! # Client Configuration
//!
//! Configuration loaded from environment variables and validated before the
//! API client is built.
//!
//! | Variable | Default |
//! |---|---|
//! | `LMS_API_URL` | `$LMS_API_ORIGIN/api` |
//! | `LMS_API_ORIGIN` | `http://127.0.0.1:8000` |
//! | `LMS_REQUEST_TIMEOUT_MS` | `8000` |
//! | `LMS_SESSION_FILE` | `.lms-session.json` |
//!
//! ```rust,no_run
//! use lms_client::config::ClientConfig;
//!
//! let config = ClientConfig::from_env()?;
//! config.validate()?;
//! println!("talking to {}", config.api_url);
//! # Ok::<(), lms_client::core::error::AppError>(())
//! ```

use std::path::PathBuf;
use std::time::Duration;

use lib_utils::envs::{get_env_or, get_env_parse_or};

use crate::core::error::{AppError, Result};

pub const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:8000";
pub const DEFAULT_API_PATH: &str = "/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 8000;
pub const DEFAULT_SESSION_FILE: &str = ".lms-session.json";

/// Upper bound accepted for `LMS_REQUEST_TIMEOUT_MS` (two minutes).
const MAX_TIMEOUT_MS: u64 = 120_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, without trailing slash
    pub api_url: String,

    /// Default per-request timeout
    pub request_timeout: Duration,

    /// Where the CLI keeps tokens and the user snapshot
    pub session_file: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: resolve_api_url("", DEFAULT_API_ORIGIN),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let api_url = resolve_api_url(
            &get_env_or("LMS_API_URL", ""),
            &get_env_or("LMS_API_ORIGIN", DEFAULT_API_ORIGIN),
        );

        let timeout_ms: u64 = get_env_parse_or("LMS_REQUEST_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)
            .map_err(|_| AppError::Config("LMS_REQUEST_TIMEOUT_MS must be a whole number of milliseconds".to_string()))?;

        let session_file = PathBuf::from(get_env_or("LMS_SESSION_FILE", DEFAULT_SESSION_FILE));

        Ok(Self {
            api_url,
            request_timeout: Duration::from_millis(timeout_ms),
            session_file,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "API URL must start with http:// or https://, got '{}'",
                self.api_url
            )));
        }

        let timeout_ms = self.request_timeout.as_millis();
        if timeout_ms < 1 || timeout_ms > MAX_TIMEOUT_MS as u128 {
            return Err(AppError::Config(format!(
                "LMS_REQUEST_TIMEOUT_MS must be between 1 and {}",
                MAX_TIMEOUT_MS
            )));
        }

        if self.session_file.as_os_str().is_empty() {
            return Err(AppError::Config("LMS_SESSION_FILE must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Resolve the API base URL.
///
/// An explicit absolute URL wins. A relative one (such as `/api`) is joined to
/// `origin`, and an empty one falls back to `origin` + `/api`. The trailing `/`
/// is always stripped.
fn resolve_api_url(explicit: &str, origin: &str) -> String {
    let explicit = explicit.trim();
    let origin = origin.trim().trim_end_matches('/');

    let url = if explicit.is_empty() {
        format!("{}{}", origin, DEFAULT_API_PATH)
    } else if explicit.starts_with('/') {
        format!("{}{}", origin, explicit)
    } else {
        explicit.to_string()
    };

    url.trim_end_matches('/').to_string()
}
