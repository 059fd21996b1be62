//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the learning-management backend
//! and the student client. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, signup, identity and token DTOs
//!   - **[`dto::profile`]**: Profile and notification settings
//!   - **[`dto::course`]**: Course list and overview records
//!   - **[`dto::material`]**: Learning materials (tagged by material type)
//!   - **[`dto::assignment`]**: Assignments and submissions
//!   - **[`dto::assessment`]**: Tests, questions, answers and attempt results
//!   - **[`dto::chat`]**: Course chat channels and messages
//!   - **[`dto::grades`]**, **[`dto::calendar`]**, **[`dto::notification`]**
//! - **[`utils`]**: Display-name helpers shared by mapping and signup
//!
//! ## Wire Format
//!
//! Two naming conventions meet here:
//! - Auth and profile records come from the backend in **snake_case** and are
//!   modelled twice: a `Backend*` wire struct and a client record. The client
//!   maps one into the other.
//! - Every other record travels in **camelCase** and is deserialized straight
//!   into the client record (`#[serde(rename_all = "camelCase")]`).
//!
//! Discriminated shapes (material detail, test question, calendar event type)
//! are Rust enums keyed on the existing `type` field.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::{BackendUser, UserRole};
//!
//! let raw = r#"{"id":"u1","email":"ann@example.com","first_name":"Ann","last_name":null,"role":"owner"}"#;
//! let user: BackendUser = serde_json::from_str(raw).unwrap();
//! assert_eq!(UserRole::from_backend(&user.role), UserRole::Student);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
