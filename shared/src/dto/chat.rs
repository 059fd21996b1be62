//! # Chat Data Transfer Objects
//!
//! Course chat is request based: channels are listed per course and messages
//! are paged with an opaque cursor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserRole;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatChannel {
    pub id: String,
    pub name: String,
    pub unread_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessageAuthor {
    pub id: String,
    pub name: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub author: ChatMessageAuthor,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// One page of channel messages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessagesResponse {
    pub messages: Vec<ChatMessage>,
    pub next_cursor: Option<String>,
}

/// Body of `POST /chat/channels/{id}/messages`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendMessageRequest {
    pub text: String,
}
