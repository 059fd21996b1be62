//! # Core Abstractions
//!
//! Core traits and error types shared by the API layer, the application layer
//! and the CLI.
//!
//! - **[`error`]**: Application error types (`AppError`, `FieldErrors`, `Result<T>`)
//! - **[`service`]**: The `LmsService` trait implemented by the HTTP client
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use lms_client::core::LmsService;
//! use lms_client::services::api::ApiClient;
//! use lms_client::session::{MemorySessionStore, Session};
//!
//! let session = Session::new(MemorySessionStore::new());
//! let api: Arc<dyn LmsService> = Arc::new(ApiClient::new("http://127.0.0.1:8000/api", session));
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, FieldErrors, Result};
pub use service::LmsService;
