//! # Notification Data Transfer Objects
//!
//! Notification feed records plus the unread-badge helpers used by the
//! header notification button.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Badge text is capped at this count; above it the badge reads `9+`.
pub const BADGE_CAP: usize = 9;

/// Notification type. The set is open: unknown types are kept verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    AssignmentComment,
    TestGraded,
    AssignmentDeadline,
    System,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationEntity {
    Assignment,
    Test,
    Course,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub body: String,
    pub entity_type: NotificationEntity,
    pub entity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

/// Body of `POST /notifications/{id}/read`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkReadRequest {
    pub read: bool,
}

/// Number of unread notifications.
pub fn unread_count(items: &[NotificationItem]) -> usize {
    items.iter().filter(|item| !item.read).count()
}

/// Text for the unread badge, `None` when there is nothing unread.
pub fn badge_label(unread: usize) -> Option<String> {
    match unread {
        0 => None,
        n if n > BADGE_CAP => Some(format!("{}+", BADGE_CAP)),
        n => Some(n.to_string()),
    }
}
