//! # Profile Endpoints
//!
//! Profile read/update, notification settings and password change.

use serde::de::IgnoredAny;
use shared::{
    BackendNotificationSettings, BackendNotificationSettingsUpdate, BackendProfile,
    BackendProfilePatch, ChangePasswordRequest, NotificationSettings, Profile, ProfileUpdate,
};

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::fixtures::fixtures;
use super::outcome::{fail_soft, Outcome};

#[tracing::instrument(skip(client))]
pub async fn get_profile(client: &ApiClient) -> Outcome<Profile> {
    let endpoint = Endpoint::Profile;
    fail_soft(
        endpoint.name(),
        async { client.fetch::<BackendProfile>(endpoint).await.map(Profile::from) },
        || fixtures().profile.clone(),
    )
    .await
}

/// Send only the fields set in `update`.
///
/// On failure the update is merged over the fixture profile.
#[tracing::instrument(skip(client, update))]
pub async fn update_profile(client: &ApiClient, update: &ProfileUpdate) -> Outcome<Profile> {
    let endpoint = Endpoint::UpdateProfile;
    let patch = BackendProfilePatch::from(update);
    fail_soft(
        endpoint.name(),
        async {
            client
                .send::<BackendProfile, _>(endpoint, &patch)
                .await
                .map(Profile::from)
        },
        || update.apply_to(&fixtures().profile),
    )
    .await
}

#[tracing::instrument(skip(client))]
pub async fn get_notification_settings(client: &ApiClient) -> Outcome<NotificationSettings> {
    let endpoint = Endpoint::NotificationSettings;
    fail_soft(
        endpoint.name(),
        async {
            client
                .fetch::<BackendNotificationSettings>(endpoint)
                .await
                .map(NotificationSettings::from)
        },
        || fixtures().notification_settings,
    )
    .await
}

/// Save notification settings. Both paths return the submitted settings.
#[tracing::instrument(skip(client))]
pub async fn update_notification_settings(
    client: &ApiClient,
    settings: NotificationSettings,
) -> Outcome<NotificationSettings> {
    let endpoint = Endpoint::UpdateNotificationSettings;
    let body = BackendNotificationSettingsUpdate::from(settings);
    fail_soft(
        endpoint.name(),
        async {
            client
                .send::<IgnoredAny, _>(endpoint, &body)
                .await
                .map(|_| settings)
        },
        || settings,
    )
    .await
}

#[tracing::instrument(skip_all)]
pub async fn change_password(client: &ApiClient, current_password: &str, new_password: &str) -> Outcome<()> {
    let endpoint = Endpoint::ChangePassword;
    let body = ChangePasswordRequest {
        current_password: current_password.to_string(),
        new_password: new_password.to_string(),
    };
    fail_soft(
        endpoint.name(),
        async { client.send::<IgnoredAny, _>(endpoint, &body).await.map(|_| ()) },
        || (),
    )
    .await
}
