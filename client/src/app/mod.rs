//! # Application Layer
//!
//! Screen-level workflows built on top of [`LmsService`](crate::core::LmsService).
//! Everything here is generic over the service trait so it runs against the
//! HTTP [`ApiClient`](crate::services::api::ApiClient) or a test double.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  app                                         │
//! │  - auth::submit_login / submit_signup        │
//! │  - course::load_course_page                  │
//! │  - chat::ChatThread                          │
//! │  - state::LoadGuard                          │
//! └──────────────────┬───────────────────────────┘
//!                    │ LmsService
//! ┌──────────────────▼───────────────────────────┐
//! │  services::api (fail-soft façade)            │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - **[`auth`]**: Login and signup forms with field-level validation
//! - **[`course`]**: Course page assembled from five concurrent requests
//! - **[`chat`]**: Channel thread with optimistic send
//! - **[`state`]**: Generation guard for discarding superseded loads

pub mod auth;
pub mod chat;
pub mod course;
pub mod state;

pub use auth::{submit_login, submit_signup, LoginForm, SignupForm};
pub use chat::ChatThread;
pub use course::{load_course_page, CoursePage};
pub use state::{LoadGuard, LoadTicket};

use shared::{badge_label, unread_count, NotificationItem};

/// Badge text for the notification bell, `None` when everything is read.
pub fn notification_badge(items: &[NotificationItem]) -> Option<String> {
    badge_label(unread_count(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::fixtures;

    #[test]
    fn test_notification_badge_counts_fixture_unread() {
        assert_eq!(notification_badge(&fixtures().notifications).as_deref(), Some("1"));
    }

    #[test]
    fn test_notification_badge_empty() {
        assert_eq!(notification_badge(&[]), None);
    }
}
