//! Logging configuration from environment variables

use std::path::PathBuf;

use lib_utils::envs::get_env_or;

pub const DEFAULT_LOG_LEVEL: &str = "lms_client=info,warn";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "lms-client.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "lms_client=debug,info")
    pub log_level: String,
    /// Log directory (daily rotation happens here)
    pub log_dir: PathBuf,
    /// Mirror events to stderr as well as the file
    pub log_to_stderr: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            log_to_stderr: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from `RUST_LOG`, `LMS_LOG_DIR` and `LMS_LOG_STDERR`.
    pub fn from_env() -> Self {
        Self {
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_LEVEL),
            log_dir: PathBuf::from(get_env_or("LMS_LOG_DIR", DEFAULT_LOG_DIR)),
            log_to_stderr: get_env_or("LMS_LOG_STDERR", "0") == "1",
        }
    }

    /// Path of today's log file prefix
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_NAME)
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
