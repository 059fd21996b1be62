//! # Profile Data Transfer Objects
//!
//! Client profile and notification settings, their backend (snake_case)
//! counterparts, and the conversions between the two.

use serde::{Deserialize, Serialize};

/// Student profile as shown on the profile page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub university: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled_since: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_courses: Option<u32>,
    #[serde(default)]
    pub timezone: String,
}

/// Partial profile change. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl ProfileUpdate {
    /// Overlay the set fields on top of `base`.
    pub fn apply_to(&self, base: &Profile) -> Profile {
        let mut merged = base.clone();
        if let Some(first_name) = &self.first_name {
            merged.first_name = first_name.clone();
        }
        if let Some(last_name) = &self.last_name {
            merged.last_name = last_name.clone();
        }
        if let Some(email) = &self.email {
            merged.email = email.clone();
        }
        if let Some(phone) = &self.phone {
            merged.phone = phone.clone();
        }
        if let Some(group) = &self.group {
            merged.group = group.clone();
        }
        if let Some(university) = &self.university {
            merged.university = university.clone();
        }
        if let Some(timezone) = &self.timezone {
            merged.timezone = timezone.clone();
        }
        merged
    }
}

/// Profile record as the backend sends it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendProfile {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub group: Option<String>,
    pub university: Option<String>,
    pub phone: Option<String>,
    pub timezone: Option<String>,
}

/// Body of `PUT /profile`: only the fields being changed
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl From<BackendProfile> for Profile {
    fn from(profile: BackendProfile) -> Self {
        Profile {
            id: profile.id,
            first_name: profile.first_name.unwrap_or_default(),
            last_name: profile.last_name.unwrap_or_default(),
            email: profile.email,
            phone: profile.phone.unwrap_or_default(),
            group: profile.group.unwrap_or_default(),
            university: profile.university.unwrap_or_default(),
            enrolled_since: None,
            completed_courses: None,
            timezone: profile.timezone.unwrap_or_default(),
        }
    }
}

impl From<&ProfileUpdate> for BackendProfilePatch {
    fn from(update: &ProfileUpdate) -> Self {
        BackendProfilePatch {
            email: update.email.clone(),
            first_name: update.first_name.clone(),
            last_name: update.last_name.clone(),
            group: update.group.clone(),
            university: update.university.clone(),
            phone: update.phone.clone(),
            timezone: update.timezone.clone(),
        }
    }
}

/// Notification preferences as the client presents them
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub email_assignments: bool,
    pub email_tests: bool,
    pub email_news: bool,
    pub in_app_reminders: bool,
}

/// Notification preferences as the backend stores them
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendNotificationSettings {
    pub email_assignment_graded: bool,
    pub email_test_graded: bool,
    pub email_deadline_reminder: bool,
    #[serde(default)]
    pub email_comment_added: bool,
    pub email_course_announcement: bool,
    #[serde(default)]
    pub reminder_days_before: i32,
}

/// Body of `PUT /profile/notifications-settings`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendNotificationSettingsUpdate {
    pub email_assignment_graded: bool,
    pub email_test_graded: bool,
    pub email_course_announcement: bool,
    pub email_deadline_reminder: bool,
}

impl From<BackendNotificationSettings> for NotificationSettings {
    fn from(settings: BackendNotificationSettings) -> Self {
        NotificationSettings {
            email_assignments: settings.email_assignment_graded,
            email_tests: settings.email_test_graded,
            email_news: settings.email_course_announcement,
            in_app_reminders: settings.email_deadline_reminder,
        }
    }
}

impl From<NotificationSettings> for BackendNotificationSettingsUpdate {
    fn from(settings: NotificationSettings) -> Self {
        BackendNotificationSettingsUpdate {
            email_assignment_graded: settings.email_assignments,
            email_test_graded: settings.email_tests,
            email_course_announcement: settings.email_news,
            email_deadline_reminder: settings.in_app_reminders,
        }
    }
}

/// Body of `POST /profile/change-password`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}
