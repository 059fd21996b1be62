//! # Service Traits
//!
//! Traits for dependency injection, so the application layer can run against
//! the HTTP client or a test double.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::{
    AssignmentDetail, AssignmentListItem, AssignmentSubmission, AuthSession, AuthUser,
    CalendarEvent, ChatChannel, ChatMessagesResponse, CourseGrades, CourseModuleMaterials,
    CourseOverview, CourseStatusFilter, CourseTestListItem, MaterialDetail, NotificationItem,
    NotificationSettings, Profile, ProfileUpdate, StudentCourse, TestAttemptAnswer,
    TestAttemptResult, TestDetail,
};

use crate::services::api::{Outcome, SubmissionDraft};

/// Every learning-management operation available to the student client.
///
/// Operations never fail: each returns an [`Outcome`] that is either live
/// backend data or fallback data tagged with the transport failure.
#[async_trait]
pub trait LmsService: Send + Sync {
    // --- Auth

    /// Login with email and password, persisting tokens and the user snapshot
    async fn login(&self, email: &str, password: &str) -> Outcome<AuthSession>;

    /// Sign up; `name` is split into first and last name on the first space
    async fn signup(&self, name: &str, email: &str, password: &str) -> Outcome<AuthSession>;

    async fn me(&self) -> Outcome<AuthUser>;

    /// Forget the local session. No network call.
    fn logout(&self);

    /// User snapshot kept by the last login or signup
    fn current_user(&self) -> Option<AuthUser>;

    // --- Profile

    async fn get_profile(&self) -> Outcome<Profile>;

    async fn update_profile(&self, update: &ProfileUpdate) -> Outcome<Profile>;

    async fn get_notification_settings(&self) -> Outcome<NotificationSettings>;

    async fn update_notification_settings(
        &self,
        settings: NotificationSettings,
    ) -> Outcome<NotificationSettings>;

    async fn change_password(&self, current_password: &str, new_password: &str) -> Outcome<()>;

    // --- Courses and materials

    async fn get_student_courses(&self, status: Option<CourseStatusFilter>) -> Outcome<Vec<StudentCourse>>;

    async fn get_course_overview(&self, course_id: &str) -> Outcome<CourseOverview>;

    async fn get_course_materials(&self, course_id: &str) -> Outcome<Vec<CourseModuleMaterials>>;

    async fn get_material(&self, material_id: &str) -> Outcome<MaterialDetail>;

    async fn update_material_progress(
        &self,
        material_id: &str,
        view_progress_percent: f64,
        completed: bool,
    ) -> Outcome<()>;

    // --- Assignments

    async fn get_course_assignments(&self, course_id: &str) -> Outcome<Vec<AssignmentListItem>>;

    async fn get_assignment(&self, assignment_id: &str) -> Outcome<AssignmentDetail>;

    async fn get_assignment_submissions(&self, assignment_id: &str) -> Outcome<Vec<AssignmentSubmission>>;

    async fn create_assignment_submission(
        &self,
        assignment_id: &str,
        draft: &SubmissionDraft,
    ) -> Outcome<AssignmentSubmission>;

    // --- Tests

    async fn get_course_tests(&self, course_id: &str) -> Outcome<Vec<CourseTestListItem>>;

    async fn get_test(&self, test_id: &str) -> Outcome<TestDetail>;

    async fn submit_test(&self, test_id: &str, answers: Vec<TestAttemptAnswer>) -> Outcome<TestAttemptResult>;

    // --- Chat

    async fn get_chat_channels(&self, course_id: &str) -> Outcome<Vec<ChatChannel>>;

    async fn get_chat_messages(&self, channel_id: &str, cursor: Option<&str>) -> Outcome<ChatMessagesResponse>;

    async fn send_chat_message(&self, channel_id: &str, text: &str) -> Outcome<()>;

    // --- Grades, calendar, notifications

    async fn get_course_grades(&self, course_id: &str) -> Outcome<CourseGrades>;

    async fn get_calendar(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Outcome<Vec<CalendarEvent>>;

    async fn get_notifications(&self) -> Outcome<Vec<NotificationItem>>;

    async fn mark_notification_read(&self, notification_id: &str) -> Outcome<()>;
}
