//! # Student LMS Client - Library Root
//!
//! Data-access layer for a student learning-management client. Every
//! backend operation is **fail-soft**: when the network, the backend or the
//! response body fails, the operation still returns usable fixture data,
//! tagged so the caller can tell it apart from live data.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │              lms-client (this crate)                   │
//! ├────────────────────────────────────────────────────────┤
//! │  app        - Screen workflows (forms, course, chat)   │
//! │  services   - Fail-soft endpoint façade + transport    │
//! │  session    - Token and user snapshot storage          │
//! │  config     - Environment configuration                │
//! │  debug      - File logging                             │
//! └────────────────────────────────────────────────────────┘
//!          │ HTTP (reqwest)
//!          ▼
//! ┌─────────────────┐
//! │  LMS backend    │
//! │  (`/api`)       │
//! └─────────────────┘
//! ```
//!
//! ### Module Dependency Graph
//!
//! ```text
//! main.rs
//!   │
//!   ├── app (forms, course page, chat thread)
//!   │   └── core::LmsService
//!   │
//!   └── services::api (ApiClient implements LmsService)
//!       ├── transport (timeout, bearer token, status check)
//!       ├── endpoints (method + path per route)
//!       ├── fixtures (fallback data)
//!       └── session (tokens, user snapshot)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lms_client::core::LmsService;
//! use lms_client::services::api::ApiClient;
//! use lms_client::session::{MemorySessionStore, Session};
//!
//! # async fn run() {
//! let api = ApiClient::new("http://127.0.0.1:8000/api", Session::new(MemorySessionStore::new()));
//! let courses = api.get_student_courses(None).await;
//! if courses.is_fallback() {
//!     eprintln!("showing offline data");
//! }
//! # }
//! ```
//!
//! ## Dependencies
//!
//! - `reqwest` - HTTP client
//! - `tokio` - Async runtime
//! - `tracing` - Structured logging
//! - `shared` - Wire and client records

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod session;
pub mod utils;

pub use core::{AppError, LmsService, Result};
pub use services::api::{ApiClient, Outcome};
