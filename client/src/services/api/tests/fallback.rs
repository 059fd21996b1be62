//! # Fallback Tests
//!
//! With the backend unreachable or failing, every operation serves its
//! fixture tagged as `Fallback` and never errors.

use super::*;
use crate::core::LmsService;
use axum::http::StatusCode;
use axum::routing::get;
use shared::{
    unread_count, CourseStatusFilter, NotificationSettings, ProfileUpdate, TestAttemptAnswer,
};

#[tokio::test]
async fn test_read_operations_fall_back_when_offline() {
    // Arrange
    let api = offline_client();
    let fx = fixtures();

    // Act + Assert
    let courses = api.get_student_courses(Some(CourseStatusFilter::Active)).await;
    assert!(courses.is_fallback());
    assert_eq!(courses.data(), &fx.student_courses);

    assert_eq!(api.get_profile().await.into_data(), fx.profile);
    assert_eq!(api.get_notification_settings().await.into_data(), fx.notification_settings);
    assert_eq!(api.me().await.into_data(), fx.user());
    assert_eq!(api.get_course_overview("course_9").await.into_data(), fx.course_overview);
    assert_eq!(api.get_course_materials("course_9").await.into_data(), fx.course_materials);
    assert_eq!(api.get_material("mat_9").await.into_data(), fx.material_detail);
    assert_eq!(api.get_course_assignments("course_9").await.into_data(), fx.assignments);
    assert_eq!(api.get_assignment("ass_9").await.into_data(), fx.assignment_detail);
    assert_eq!(api.get_assignment_submissions("ass_9").await.into_data(), fx.submissions);
    assert_eq!(api.get_course_tests("course_9").await.into_data(), fx.tests);
    assert_eq!(api.get_test("test_9").await.into_data(), fx.test_detail);
    assert_eq!(api.get_chat_channels("course_9").await.into_data(), fx.chat_channels);
    assert_eq!(
        api.get_chat_messages("ch_9", Some("cursor")).await.into_data(),
        fx.chat_messages
    );
    assert_eq!(api.get_course_grades("course_9").await.into_data(), fx.course_grades);
    assert_eq!(
        api.get_calendar(lib_utils::now_utc(), lib_utils::days_from_now(7))
            .await
            .into_data(),
        fx.calendar_events
    );

    let notifications = api.get_notifications().await;
    assert!(notifications.is_fallback());
    assert_eq!(unread_count(notifications.data()), 1);
}

#[tokio::test]
async fn test_write_operations_pretend_success_when_offline() {
    let api = offline_client();

    let changed = api.change_password("old-secret", "new-secret").await;
    assert!(changed.is_fallback());
    assert!(changed.cause().is_some());

    assert!(api.update_material_progress("mat_21", 80.0, false).await.is_fallback());
    assert!(api.send_chat_message("ch_general", "hello").await.is_fallback());
    assert!(api.mark_notification_read("n1").await.is_fallback());

    let result = api
        .submit_test(
            "test_1",
            vec![TestAttemptAnswer::Choice {
                question_id: "q1".to_string(),
                selected_option_ids: vec!["o1".to_string()],
            }],
        )
        .await;
    assert_eq!(result.into_data(), fixtures().test_attempt_result);
}

#[tokio::test]
async fn test_profile_update_merges_over_fixture() {
    // Arrange
    let api = offline_client();
    let update = ProfileUpdate {
        first_name: Some("Maria".to_string()),
        ..ProfileUpdate::default()
    };

    // Act
    let outcome = api.update_profile(&update).await;

    // Assert
    assert!(outcome.is_fallback());
    let mut expected = fixtures().profile.clone();
    expected.first_name = "Maria".to_string();
    assert_eq!(outcome.into_data(), expected);
}

#[tokio::test]
async fn test_settings_update_returns_submitted_settings() {
    let api = offline_client();
    let settings = NotificationSettings {
        email_assignments: false,
        email_tests: false,
        email_news: true,
        in_app_reminders: false,
    };

    let outcome = api.update_notification_settings(settings).await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.into_data(), settings);
}

#[tokio::test]
async fn test_server_error_falls_back_with_status() {
    // Arrange
    let router = Router::new().route(
        "/api/courses/{id}/overview",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let api = test_client(&spawn_backend(router).await);

    // Act
    let outcome = api.get_course_overview("course_1").await;

    // Assert
    assert_eq!(outcome.cause().and_then(|cause| cause.status), Some(500));
    assert_eq!(outcome.into_data(), fixtures().course_overview);
}

#[tokio::test]
async fn test_client_error_is_not_distinguished() {
    let router = Router::new().route("/api/notifications", get(|| async { StatusCode::NOT_FOUND }));
    let api = test_client(&spawn_backend(router).await);

    let outcome = api.get_notifications().await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.cause().and_then(|cause| cause.status), Some(404));
}

#[tokio::test]
async fn test_malformed_json_falls_back() {
    let router = Router::new().route("/api/student/courses", get(|| async { "this is not json" }));
    let api = test_client(&spawn_backend(router).await);

    let outcome = api.get_student_courses(None).await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.cause().and_then(|cause| cause.status), Some(200));
    assert_eq!(outcome.into_data(), fixtures().student_courses);
}

#[tokio::test]
async fn test_wrong_shape_falls_back() {
    let router = Router::new().route(
        "/api/materials/{id}",
        get(|| async { axum::Json(serde_json::json!({ "id": "mat_1", "type": "hologram" })) }),
    );
    let api = test_client(&spawn_backend(router).await);

    let outcome = api.get_material("mat_1").await;

    assert!(outcome.is_fallback());
    assert_eq!(outcome.into_data(), fixtures().material_detail);
}

#[tokio::test]
async fn test_repeated_fallback_reads_are_equal() {
    let api = offline_client();

    let first = api.get_course_overview("course_1").await.into_data();
    let second = api.get_course_overview("course_1").await.into_data();

    assert_eq!(first, second);
}
