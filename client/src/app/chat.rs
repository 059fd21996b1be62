//! # Course Chat Thread
//!
//! Messages of one channel plus the messages this client sent. A sent message
//! is inserted locally before the request goes out and is never reconciled
//! with the backend copy.

use chrono::Utc;
use shared::{ChatChannel, ChatMessage, ChatMessageAuthor, UserRole};
use uuid::Uuid;

use crate::core::LmsService;
use crate::services::api::Outcome;

const LOCAL_AUTHOR_ID: &str = "local_student";
const LOCAL_AUTHOR_NAME: &str = "You";

#[derive(Debug, Clone, PartialEq)]
pub struct ChatThread {
    pub channel_id: String,
    pub messages: Vec<ChatMessage>,
    pub next_cursor: Option<String>,
    /// Set when any page of this thread came from fixtures.
    pub degraded: bool,
}

impl ChatThread {
    /// Load the first page of `channel_id`.
    pub async fn load<S>(service: &S, channel_id: &str) -> Self
    where
        S: LmsService + ?Sized,
    {
        let outcome = service.get_chat_messages(channel_id, None).await;
        let degraded = outcome.is_fallback();
        let page = outcome.into_data();

        Self {
            channel_id: channel_id.to_string(),
            messages: page.messages,
            next_cursor: page.next_cursor,
            degraded,
        }
    }

    /// List the course channels and open the first one, if any.
    pub async fn open_course<S>(service: &S, course_id: &str) -> (Outcome<Vec<ChatChannel>>, Option<Self>)
    where
        S: LmsService + ?Sized,
    {
        let channels = service.get_chat_channels(course_id).await;
        let thread = match channels.data().first() {
            Some(first) => Some(Self::load(service, &first.id).await),
            None => None,
        };
        (channels, thread)
    }

    /// Fetch the next page and append it. Returns `false` when there was no cursor.
    pub async fn load_more<S>(&mut self, service: &S) -> bool
    where
        S: LmsService + ?Sized,
    {
        let Some(cursor) = self.next_cursor.take() else {
            return false;
        };

        let outcome = service.get_chat_messages(&self.channel_id, Some(&cursor)).await;
        self.degraded |= outcome.is_fallback();
        let page = outcome.into_data();

        // Fixture pages repeat; don't duplicate what is already shown.
        for message in page.messages {
            if !self.messages.iter().any(|m| m.id == message.id) {
                self.messages.push(message);
            }
        }
        self.next_cursor = page.next_cursor.filter(|next| *next != cursor);
        true
    }

    /// Send `text` to the channel.
    ///
    /// Whitespace-only text is ignored and no request is made. Otherwise the
    /// message is appended locally first, authored by the signed-in user or
    /// by a local placeholder, and the returned outcome reports whether the
    /// backend accepted it. The local copy stays either way.
    pub async fn send<S>(&mut self, service: &S, text: &str) -> Option<Outcome<()>>
    where
        S: LmsService + ?Sized,
    {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let author = match service.current_user() {
            Some(user) => ChatMessageAuthor {
                id: user.id,
                name: user.name,
                role: UserRole::Student,
            },
            None => ChatMessageAuthor {
                id: LOCAL_AUTHOR_ID.to_string(),
                name: LOCAL_AUTHOR_NAME.to_string(),
                role: UserRole::Student,
            },
        };

        self.messages.push(ChatMessage {
            id: format!("local_{}", Uuid::new_v4().simple()),
            author,
            text: text.to_string(),
            created_at: Utc::now(),
        });

        let outcome = service.send_chat_message(&self.channel_id, text).await;
        if let Some(cause) = outcome.cause() {
            tracing::warn!(channel_id = %self.channel_id, error = %cause, "Message kept locally only");
        }
        Some(outcome)
    }

    /// Messages oldest first.
    pub fn sorted(&self) -> Vec<&ChatMessage> {
        let mut messages: Vec<&ChatMessage> = self.messages.iter().collect();
        messages.sort_by_key(|message| message.created_at);
        messages
    }
}
