//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged between the student
//! client and the learning-management backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login/signup requests, backend user, tokens, client identity
//! - [`profile`] - Profile, partial profile update, notification settings
//! - [`course`] - Student course list, course overview, progress status
//! - [`material`] - Material list and material detail variants
//! - [`assignment`] - Assignments, criteria and submissions
//! - [`assessment`] - Tests, questions, answers and attempt results
//! - [`chat`] - Chat channels and messages
//! - [`grades`] - Course grade book
//! - [`calendar`] - Calendar events
//! - [`notification`] - Notification feed and unread badge helpers
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/auth/login
//! Content-Type: application/json
//!
//! { "email": "ivan@campus.example", "password": "secret1" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//!
//! {
//!   "access_token": "eyJhbGciOi...",
//!   "refresh_token": "eyJhbGciOi...",
//!   "user": { "id": "stu_1", "email": "ivan@campus.example",
//!             "first_name": "Ivan", "last_name": "Ivanov", "role": "student" }
//! }
//! ```

pub mod assessment;
pub mod assignment;
pub mod auth;
pub mod calendar;
pub mod chat;
pub mod course;
pub mod grades;
pub mod material;
pub mod notification;
pub mod profile;

pub use assessment::*;
pub use assignment::*;
pub use auth::*;
pub use calendar::*;
pub use chat::*;
pub use course::*;
pub use grades::*;
pub use material::*;
pub use notification::*;
pub use profile::*;

use serde::{Deserialize, Serialize};

/// Reference to a person shown next to a record (instructor, comment author).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonRef {
    pub id: String,
    pub name: String,
}

/// Downloadable file attached to a material, assignment or submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileResource {
    pub id: String,
    pub name: String,
    pub url: String,
}
