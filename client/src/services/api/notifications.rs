//! # Notification Endpoints

use serde::de::IgnoredAny;
use shared::{MarkReadRequest, NotificationItem};

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::fixtures::fixtures;
use super::outcome::{fail_soft, Outcome};

#[tracing::instrument(skip(client))]
pub async fn get_notifications(client: &ApiClient) -> Outcome<Vec<NotificationItem>> {
    let endpoint = Endpoint::Notifications;
    fail_soft(endpoint.name(), client.fetch(endpoint), || fixtures().notifications.clone()).await
}

#[tracing::instrument(skip(client))]
pub async fn mark_notification_read(client: &ApiClient, notification_id: &str) -> Outcome<()> {
    let endpoint = Endpoint::MarkNotificationRead { notification_id };
    fail_soft(
        endpoint.name(),
        async {
            client
                .send::<IgnoredAny, _>(endpoint, &MarkReadRequest { read: true })
                .await
                .map(|_| ())
        },
        || (),
    )
    .await
}
