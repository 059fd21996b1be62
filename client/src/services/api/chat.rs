//! # Chat Endpoints
//!
//! Request/poll based course chat. There is no live socket.

use serde::de::IgnoredAny;
use shared::{ChatChannel, ChatMessagesResponse, SendMessageRequest};

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::fixtures::fixtures;
use super::outcome::{fail_soft, Outcome};

#[tracing::instrument(skip(client))]
pub async fn get_chat_channels(client: &ApiClient, course_id: &str) -> Outcome<Vec<ChatChannel>> {
    let endpoint = Endpoint::ChatChannels { course_id };
    fail_soft(endpoint.name(), client.fetch(endpoint), || fixtures().chat_channels.clone()).await
}

/// One page of channel messages; pass the previous `next_cursor` to page back.
#[tracing::instrument(skip(client))]
pub async fn get_chat_messages(
    client: &ApiClient,
    channel_id: &str,
    cursor: Option<&str>,
) -> Outcome<ChatMessagesResponse> {
    let endpoint = Endpoint::ChatMessages { channel_id, cursor };
    fail_soft(endpoint.name(), client.fetch(endpoint), || fixtures().chat_messages.clone()).await
}

#[tracing::instrument(skip(client, text), fields(len = text.len()))]
pub async fn send_chat_message(client: &ApiClient, channel_id: &str, text: &str) -> Outcome<()> {
    let endpoint = Endpoint::SendChatMessage { channel_id };
    let body = SendMessageRequest {
        text: text.to_string(),
    };
    fail_soft(
        endpoint.name(),
        async { client.send::<IgnoredAny, _>(endpoint, &body).await.map(|_| ()) },
        || (),
    )
    .await
}
