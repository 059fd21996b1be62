//! # Backend API Client Module
//!
//! Fail-soft client for the learning-management backend.
//!
//! Every operation goes through the shared [`Transport`] and returns an
//! [`Outcome`]: `Live` with data mapped from the backend response, or
//! `Fallback` with a fixture value and the [`TransportError`] that caused it.
//! Nothing in this module returns an error to its caller.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - ApiClient, request helpers, LmsService impl
//! ├── transport.rs     - JSON transport, timeout, TransportError
//! ├── endpoints.rs     - Route table (method + path per operation)
//! ├── outcome.rs       - Live / Fallback outcome and the fail-soft helper
//! ├── fixtures.rs      - Fallback payloads
//! ├── auth.rs          - Login, signup, current user, logout
//! ├── profile.rs       - Profile, notification settings, password
//! ├── courses.rs       - Student courses, course overview
//! ├── materials.rs     - Materials and progress
//! ├── assignments.rs   - Assignments, submissions, multipart upload
//! ├── assessments.rs   - Tests and attempts
//! ├── chat.rs          - Channels and messages
//! ├── grades.rs        - Grade book
//! ├── calendar.rs      - Calendar events
//! ├── notifications.rs - Notification feed
//! └── tests/           - Integration tests against a stub backend
//! ```
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use lms_client::core::LmsService;
//! use lms_client::services::api::ApiClient;
//! use lms_client::session::{MemorySessionStore, Session};
//!
//! # async fn run() {
//! let api = ApiClient::new("http://127.0.0.1:8000/api", Session::new(MemorySessionStore::new()));
//!
//! let courses = api.get_student_courses(None).await;
//! if courses.is_fallback() {
//!     eprintln!("backend unreachable, showing sample courses");
//! }
//! for course in courses.data() {
//!     println!("{} ({}%)", course.title, course.progress_percent);
//! }
//! # }
//! ```

pub mod assessments;
pub mod assignments;
pub mod auth;
pub mod calendar;
pub mod chat;
pub mod client;
pub mod courses;
pub mod endpoints;
pub mod fixtures;
pub mod grades;
pub mod materials;
pub mod notifications;
pub mod outcome;
pub mod profile;
pub mod transport;

#[cfg(test)]
pub(crate) mod tests;

pub use assignments::{SubmissionDraft, UploadFile};
pub use client::ApiClient;
pub use endpoints::Endpoint;
pub use fixtures::{fixtures, Fixtures};
pub use outcome::Outcome;
pub use transport::{RequestOptions, Transport, TransportError, DEFAULT_TIMEOUT};
