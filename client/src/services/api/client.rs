//! # API Client
//!
//! Main HTTP client for the learning-management backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    AssignmentDetail, AssignmentListItem, AssignmentSubmission, AuthSession, AuthUser,
    CalendarEvent, ChatChannel, ChatMessagesResponse, CourseGrades, CourseModuleMaterials,
    CourseOverview, CourseStatusFilter, CourseTestListItem, MaterialDetail, NotificationItem,
    NotificationSettings, Profile, ProfileUpdate, StudentCourse, TestAttemptAnswer,
    TestAttemptResult, TestDetail,
};

use super::endpoints::Endpoint;
use super::transport::{RequestOptions, Transport, TransportError};
use super::{
    assessments, assignments, auth, calendar, chat, courses, grades, materials, notifications,
    profile, Outcome, SubmissionDraft,
};
use crate::config::ClientConfig;
use crate::core::service::LmsService;
use crate::session::Session;

/// HTTP client for the learning-management backend.
///
/// Holds the [`Transport`] (and through it the injected [`Session`]). Cheap
/// to clone; share it across tasks behind an `Arc` or by value.
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub(crate) transport: Transport,
}

impl ApiClient {
    /// Create a client for `base_url` with the default 8 s request timeout.
    pub fn new(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            transport: Transport::new(base_url, session),
        }
    }

    pub fn from_config(config: &ClientConfig, session: Session) -> Self {
        Self {
            transport: Transport::new(config.api_url.clone(), session)
                .with_default_timeout(config.request_timeout),
        }
    }

    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    pub fn session(&self) -> &Session {
        self.transport.session()
    }

    /// Issue `endpoint` without a body.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, endpoint: Endpoint<'_>) -> Result<T, TransportError> {
        self.transport
            .request(&endpoint.path(), RequestOptions::new(endpoint.method()))
            .await
    }

    /// Issue `endpoint` with a JSON body.
    pub(crate) async fn send<T, B>(&self, endpoint: Endpoint<'_>, body: &B) -> Result<T, TransportError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.transport
            .send_json(endpoint.method(), &endpoint.path(), body)
            .await
    }
}

#[async_trait]
impl LmsService for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Outcome<AuthSession> {
        auth::login(self, email, password).await
    }

    async fn signup(&self, name: &str, email: &str, password: &str) -> Outcome<AuthSession> {
        auth::signup(self, name, email, password).await
    }

    async fn me(&self) -> Outcome<AuthUser> {
        auth::me(self).await
    }

    fn logout(&self) {
        auth::logout(self)
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.session().user()
    }

    async fn get_profile(&self) -> Outcome<Profile> {
        profile::get_profile(self).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Outcome<Profile> {
        profile::update_profile(self, update).await
    }

    async fn get_notification_settings(&self) -> Outcome<NotificationSettings> {
        profile::get_notification_settings(self).await
    }

    async fn update_notification_settings(
        &self,
        settings: NotificationSettings,
    ) -> Outcome<NotificationSettings> {
        profile::update_notification_settings(self, settings).await
    }

    async fn change_password(&self, current_password: &str, new_password: &str) -> Outcome<()> {
        profile::change_password(self, current_password, new_password).await
    }

    async fn get_student_courses(&self, status: Option<CourseStatusFilter>) -> Outcome<Vec<StudentCourse>> {
        courses::get_student_courses(self, status).await
    }

    async fn get_course_overview(&self, course_id: &str) -> Outcome<CourseOverview> {
        courses::get_course_overview(self, course_id).await
    }

    async fn get_course_materials(&self, course_id: &str) -> Outcome<Vec<CourseModuleMaterials>> {
        materials::get_course_materials(self, course_id).await
    }

    async fn get_material(&self, material_id: &str) -> Outcome<MaterialDetail> {
        materials::get_material(self, material_id).await
    }

    async fn update_material_progress(
        &self,
        material_id: &str,
        view_progress_percent: f64,
        completed: bool,
    ) -> Outcome<()> {
        materials::update_material_progress(self, material_id, view_progress_percent, completed).await
    }

    async fn get_course_assignments(&self, course_id: &str) -> Outcome<Vec<AssignmentListItem>> {
        assignments::get_course_assignments(self, course_id).await
    }

    async fn get_assignment(&self, assignment_id: &str) -> Outcome<AssignmentDetail> {
        assignments::get_assignment(self, assignment_id).await
    }

    async fn get_assignment_submissions(&self, assignment_id: &str) -> Outcome<Vec<AssignmentSubmission>> {
        assignments::get_assignment_submissions(self, assignment_id).await
    }

    async fn create_assignment_submission(
        &self,
        assignment_id: &str,
        draft: &SubmissionDraft,
    ) -> Outcome<AssignmentSubmission> {
        assignments::create_assignment_submission(self, assignment_id, draft).await
    }

    async fn get_course_tests(&self, course_id: &str) -> Outcome<Vec<CourseTestListItem>> {
        assessments::get_course_tests(self, course_id).await
    }

    async fn get_test(&self, test_id: &str) -> Outcome<TestDetail> {
        assessments::get_test(self, test_id).await
    }

    async fn submit_test(&self, test_id: &str, answers: Vec<TestAttemptAnswer>) -> Outcome<TestAttemptResult> {
        assessments::submit_test(self, test_id, answers).await
    }

    async fn get_chat_channels(&self, course_id: &str) -> Outcome<Vec<ChatChannel>> {
        chat::get_chat_channels(self, course_id).await
    }

    async fn get_chat_messages(&self, channel_id: &str, cursor: Option<&str>) -> Outcome<ChatMessagesResponse> {
        chat::get_chat_messages(self, channel_id, cursor).await
    }

    async fn send_chat_message(&self, channel_id: &str, text: &str) -> Outcome<()> {
        chat::send_chat_message(self, channel_id, text).await
    }

    async fn get_course_grades(&self, course_id: &str) -> Outcome<CourseGrades> {
        grades::get_course_grades(self, course_id).await
    }

    async fn get_calendar(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Outcome<Vec<CalendarEvent>> {
        calendar::get_calendar(self, from, to).await
    }

    async fn get_notifications(&self) -> Outcome<Vec<NotificationItem>> {
        notifications::get_notifications(self).await
    }

    async fn mark_notification_read(&self, notification_id: &str) -> Outcome<()> {
        notifications::mark_notification_read(self, notification_id).await
    }
}
