//! # Logging Infrastructure
//!
//! File-based structured logging for the client binary.
//!
//! ## Features
//!
//! - **File-based logging**: `logs/lms-client.log` with daily rotation
//! - **Optional stderr mirror**: for interactive debugging
//! - **Panic hook**: panics are logged with their location before unwinding
//!
//! ## Usage
//!
//! ```rust,no_run
//! // Keep the guard alive until the program exits
//! let _guard = lms_client::debug::init_logger();
//!
//! tracing::info!(endpoint = "/courses/c1/overview", duration_ms = 42, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (default `lms_client=info,warn`)
//! - `LMS_LOG_DIR`: Log directory (default `logs`)
//! - `LMS_LOG_STDERR`: Also log to stderr (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::LogConfig;
pub use logger::init as init_logger;
