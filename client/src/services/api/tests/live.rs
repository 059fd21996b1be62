//! # Live Response Tests
//!
//! With a well-formed backend response, operations return `Live` data mapped
//! from the payload, never the fixture.

use std::collections::HashMap;
use std::sync::Arc;

use super::*;
use crate::core::LmsService;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::Json;
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared::{
    AssignmentStatus, CourseStatusFilter, MaterialContent, NotificationSettings, ProfileUpdate, ProgressStatus,
    SubmissionStatus, TestAttemptAnswer, TestQuestion, UserRole,
};

type Captured = Arc<Mutex<Vec<Value>>>;

fn backend_auth(first: Option<&str>, last: Option<&str>, role: &str) -> Value {
    json!({
        "access_token": "live-access",
        "refresh_token": "live-refresh",
        "user": {
            "id": "u_42",
            "email": "maria@campus.example",
            "first_name": first,
            "last_name": last,
            "role": role,
        }
    })
}

#[tokio::test]
async fn test_login_maps_backend_user_and_stores_tokens() {
    // Arrange
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async { Json(backend_auth(Some("Maria"), Some("Lopez"), "superuser")) }),
    );
    let api = test_client(&spawn_backend(router).await);

    // Act
    let outcome = api.login("maria@campus.example", "secret1").await;

    // Assert
    assert!(outcome.is_live());
    let auth = outcome.into_data();
    assert_eq!(auth.user.name, "Maria Lopez");
    assert_eq!(auth.user.role, UserRole::Student);
    assert_eq!(auth.tokens.access_token, "live-access");
    assert_eq!(api.session().tokens(), Some(auth.tokens.clone()));
    assert_eq!(api.current_user(), Some(auth.user));
}

#[tokio::test]
async fn test_signup_splits_name_on_first_space() {
    // Arrange
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route(
            "/api/auth/signup",
            post(|State(captured): State<Captured>, Json(body): Json<Value>| async move {
                captured.lock().push(body);
                Json(backend_auth(Some("Maria"), Some("de la Cruz"), "teacher"))
            }),
        )
        .with_state(captured.clone());
    let api = test_client(&spawn_backend(router).await);

    // Act
    let outcome = api.signup("Maria de la Cruz", "maria@campus.example", "secret1").await;

    // Assert
    assert!(outcome.is_live());
    assert_eq!(outcome.data().user.role, UserRole::Teacher);
    let body = captured.lock().pop().expect("signup body captured");
    assert_eq!(body["first_name"], "Maria");
    assert_eq!(body["last_name"], "de la Cruz");
    assert_eq!(body["email"], "maria@campus.example");
}

#[tokio::test]
async fn test_signup_single_word_name_omits_last_name() {
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route(
            "/api/auth/signup",
            post(|State(captured): State<Captured>, Json(body): Json<Value>| async move {
                captured.lock().push(body);
                Json(backend_auth(Some("Cher"), None, "student"))
            }),
        )
        .with_state(captured.clone());
    let api = test_client(&spawn_backend(router).await);

    api.signup("Cher", "cher@campus.example", "secret1").await;

    let body = captured.lock().pop().expect("signup body captured");
    assert_eq!(body["first_name"], "Cher");
    assert!(body.get("last_name").is_none());
}

#[tokio::test]
async fn test_me_without_names_uses_email() {
    let router = Router::new().route(
        "/api/auth/me",
        get(|| async {
            Json(json!({ "id": "u_7", "email": "anon@campus.example", "first_name": null, "role": "admin" }))
        }),
    );
    let api = test_client(&spawn_backend(router).await);

    let user = api.me().await;

    assert!(user.is_live());
    assert_eq!(user.data().name, "anon@campus.example");
    assert_eq!(user.data().role, UserRole::Admin);
}

#[tokio::test]
async fn test_profile_nulls_become_empty_strings() {
    let router = Router::new().route(
        "/api/profile",
        get(|| async {
            Json(json!({
                "id": "u_1",
                "email": "maria@campus.example",
                "first_name": "Maria",
                "last_name": null,
                "group": "G-7",
                "university": null,
                "phone": null,
                "timezone": "UTC",
            }))
        }),
    );
    let api = test_client(&spawn_backend(router).await);

    let profile = api.get_profile().await;

    assert!(profile.is_live());
    let profile = profile.into_data();
    assert_eq!(profile.first_name, "Maria");
    assert_eq!(profile.last_name, "");
    assert_eq!(profile.phone, "");
    assert_eq!(profile.group, "G-7");
    assert_ne!(profile, fixtures().profile);
}

#[tokio::test]
async fn test_profile_update_sends_only_set_fields() {
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route(
            "/api/profile",
            put(|State(captured): State<Captured>, Json(body): Json<Value>| async move {
                captured.lock().push(body);
                Json(json!({ "id": "u_1", "email": "maria@campus.example", "first_name": "Maria" }))
            }),
        )
        .with_state(captured.clone());
    let api = test_client(&spawn_backend(router).await);

    let update = ProfileUpdate {
        first_name: Some("Maria".to_string()),
        ..ProfileUpdate::default()
    };
    let outcome = api.update_profile(&update).await;

    assert!(outcome.is_live());
    assert_eq!(outcome.data().first_name, "Maria");
    assert_eq!(captured.lock().pop(), Some(json!({ "first_name": "Maria" })));
}

#[tokio::test]
async fn test_notification_settings_map_both_ways() {
    // Arrange
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route(
            "/api/profile/notifications-settings",
            get(|| async {
                Json(json!({
                    "email_assignment_graded": false,
                    "email_test_graded": true,
                    "email_deadline_reminder": false,
                    "email_comment_added": true,
                    "email_course_announcement": true,
                    "reminder_days_before": 3,
                }))
            })
            .put(|State(captured): State<Captured>, Json(body): Json<Value>| async move {
                captured.lock().push(body);
                StatusCode::NO_CONTENT
            }),
        )
        .with_state(captured.clone());
    let api = test_client(&spawn_backend(router).await);

    // Act
    let read = api.get_notification_settings().await;
    let settings = NotificationSettings {
        email_assignments: true,
        email_tests: false,
        email_news: true,
        in_app_reminders: false,
    };
    let written = api.update_notification_settings(settings).await;

    // Assert
    assert_eq!(
        read,
        Outcome::Live(NotificationSettings {
            email_assignments: false,
            email_tests: true,
            email_news: true,
            in_app_reminders: false,
        })
    );
    assert_eq!(written, Outcome::Live(settings));
    assert_eq!(
        captured.lock().pop(),
        Some(json!({
            "email_assignment_graded": true,
            "email_test_graded": false,
            "email_course_announcement": true,
            "email_deadline_reminder": false,
        }))
    );
}

#[tokio::test]
async fn test_write_endpoints_accept_no_content() {
    let router = Router::new()
        .route("/api/profile/change-password", post(|| async { StatusCode::NO_CONTENT }))
        .route("/api/materials/{id}/progress", post(|| async { StatusCode::NO_CONTENT }))
        .route("/api/chat/channels/{id}/messages", post(|| async { Json(json!({ "id": "m9" })) }))
        .route("/api/notifications/{id}/read", post(|| async { StatusCode::NO_CONTENT }));
    let api = test_client(&spawn_backend(router).await);

    assert!(api.change_password("old-secret", "new-secret").await.is_live());
    assert!(api.update_material_progress("mat_21", 100.0, true).await.is_live());
    assert!(api.send_chat_message("ch_general", "hi").await.is_live());
    assert!(api.mark_notification_read("n1").await.is_live());
}

#[tokio::test]
async fn test_student_courses_pass_status_filter() {
    let router = Router::new().route(
        "/api/student/courses",
        get(|Query(query): Query<HashMap<String, String>>| async move {
            let status = query.get("status").cloned().unwrap_or_default();
            Json(json!([{
                "id": format!("course_{}", status),
                "title": "Distributed Systems",
                "description": "Consensus and replication",
                "instructor": "Lena Park",
                "progressPercent": 100,
                "status": "completed",
                "nextDeadline": null,
            }]))
        }),
    );
    let api = test_client(&spawn_backend(router).await);

    let courses = api.get_student_courses(Some(CourseStatusFilter::Completed)).await;

    assert!(courses.is_live());
    assert_eq!(courses.data().len(), 1);
    assert_eq!(courses.data()[0].id, "course_completed");
    assert!(courses.data()[0].badges.is_empty());
}

#[tokio::test]
async fn test_materials_envelope_is_unwrapped() {
    let router = Router::new()
        .route(
            "/api/courses/{id}/materials",
            get(|| async {
                Json(json!({ "modules": [{
                    "id": "mod_a",
                    "title": "Basics",
                    "items": [{ "id": "m1", "type": "scorm", "title": "Package", "status": "not_started" }],
                }]}))
            }),
        )
        .route(
            "/api/materials/{id}",
            get(|| async {
                Json(json!({
                    "id": "m2",
                    "courseId": "c1",
                    "moduleId": "mod_a",
                    "type": "text",
                    "title": "Reading",
                    "status": "completed",
                    "content": "Long read",
                }))
            }),
        );
    let api = test_client(&spawn_backend(router).await);

    let modules = api.get_course_materials("c1").await;
    let detail = api.get_material("m2").await;

    assert!(modules.is_live());
    assert_eq!(modules.data()[0].items[0].id, "m1");
    assert_eq!(
        detail.data().body,
        MaterialContent::Text {
            content: "Long read".to_string()
        }
    );
}

#[tokio::test]
async fn test_empty_list_is_live_not_fallback() {
    let router = Router::new().route("/api/notifications", get(|| async { Json(json!([])) }));
    let api = test_client(&spawn_backend(router).await);

    let outcome = api.get_notifications().await;

    assert_eq!(outcome, Outcome::Live(Vec::new()));
}

#[tokio::test]
async fn test_chat_cursor_and_calendar_range_reach_backend() {
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route(
            "/api/chat/channels/{id}/messages",
            get(|State(captured): State<Captured>, Query(query): Query<HashMap<String, String>>| async move {
                captured.lock().push(json!(query));
                Json(json!({ "messages": [], "nextCursor": "older" }))
            }),
        )
        .route(
            "/api/calendar",
            get(|State(captured): State<Captured>, Query(query): Query<HashMap<String, String>>| async move {
                captured.lock().push(json!(query));
                Json(json!([]))
            }),
        )
        .with_state(captured.clone());
    let api = test_client(&spawn_backend(router).await);

    let from = lib_utils::parse_utc("2025-03-01T00:00:00+00:00").unwrap();
    let to = lib_utils::parse_utc("2025-03-08T00:00:00+00:00").unwrap();

    let page = api.get_chat_messages("ch_general", Some("a b&c")).await;
    let events = api.get_calendar(from, to).await;

    assert_eq!(page.data().next_cursor.as_deref(), Some("older"));
    assert!(events.is_live());

    let seen = captured.lock().clone();
    assert_eq!(seen[0]["cursor"], "a b&c");
    assert_eq!(seen[1]["from"], lib_utils::format_time(from));
    assert_eq!(seen[1]["to"], lib_utils::format_time(to));
}

#[tokio::test]
async fn test_repeated_live_reads_are_equal() {
    let router = Router::new().route(
        "/api/courses/{id}/grades",
        get(|| async {
            Json(json!({ "courseId": "c1", "totalScore": 12, "maxTotalScore": 20, "items": [] }))
        }),
    );
    let api = test_client(&spawn_backend(router).await);

    let first = api.get_course_grades("c1").await;
    let second = api.get_course_grades("c1").await;

    assert!(first.is_live());
    assert_eq!(first, second);
    assert_eq!(first.data().total_percent(), Some(60.0));
}

#[tokio::test]
async fn test_course_tests_decode_progress() {
    let router = Router::new().route(
        "/api/courses/{id}/tests",
        get(|| async {
            Json(json!([{
                "id": "t1",
                "title": "Quiz 1",
                "module": "Module 1",
                "deadline": "2025-03-10T12:00:00Z",
                "status": "in_progress",
                "attemptsUsed": 1,
                "attemptsLimit": 3,
                "bestScorePercent": null,
            }]))
        }),
    );
    let api = test_client(&spawn_backend(router).await);

    let tests = api.get_course_tests("c1").await;

    assert!(tests.is_live());
    let quiz = &tests.data()[0];
    assert_eq!(quiz.id, "t1");
    assert_eq!(quiz.status, ProgressStatus::InProgress);
    assert_eq!(quiz.best_score_percent, None);
    assert_eq!(quiz.attempts_left(), 2);
}

#[tokio::test]
async fn test_test_detail_decodes_question_kinds() {
    let router = Router::new().route(
        "/api/tests/{id}",
        get(|| async {
            Json(json!({
                "id": "t1",
                "title": "Quiz 1",
                "timeLimitMinutes": 15,
                "questions": [
                    {
                        "type": "single_choice",
                        "id": "q1",
                        "text": "Pick one",
                        "options": [{ "id": "o1", "text": "A" }, { "id": "o2", "text": "B" }],
                    },
                    {
                        "type": "matching",
                        "id": "q2",
                        "text": "Match them",
                        "leftItems": [{ "id": "l1", "text": "HTTP" }],
                        "rightItems": [{ "id": "r1", "text": "Protocol" }],
                    },
                ],
            }))
        }),
    );
    let api = test_client(&spawn_backend(router).await);

    let detail = api.get_test("t1").await;

    assert!(detail.is_live());
    let detail = detail.data();
    assert_eq!(detail.time_limit_minutes, Some(15));
    assert!(matches!(&detail.questions[0], TestQuestion::SingleChoice { options, .. } if options.len() == 2));
    match &detail.questions[1] {
        TestQuestion::Matching { left_items, right_items, .. } => {
            assert_eq!(left_items[0].id, "l1");
            assert_eq!(right_items[0].text, "Protocol");
        }
        other => panic!("expected matching question, got {:?}", other),
    }
    assert_eq!(detail.questions[1].id(), "q2");
    assert_eq!(detail.questions[1].text(), "Match them");
}

#[tokio::test]
async fn test_submit_test_posts_answers_body() {
    // Arrange
    let captured: Captured = Arc::default();
    let router = Router::new()
        .route(
            "/api/tests/{id}/attempts",
            post(|State(captured): State<Captured>, Json(body): Json<Value>| async move {
                captured.lock().push(body);
                Json(json!({
                    "attemptId": "a1",
                    "scorePercent": 100,
                    "passed": true,
                    "details": [{ "questionId": "q1", "correct": true }],
                }))
            }),
        )
        .with_state(captured.clone());
    let api = test_client(&spawn_backend(router).await);
    let answers = vec![TestAttemptAnswer::Choice {
        question_id: "q1".to_string(),
        selected_option_ids: vec!["o1".to_string()],
    }];

    // Act
    let result = api.submit_test("t1", answers).await;

    // Assert
    assert!(result.is_live());
    assert_eq!(result.data().attempt_id, "a1");
    assert_eq!(result.data().score_percent, 100.0);
    assert!(result.data().passed);
    assert!(result.data().details[0].correct);
    assert_eq!(
        captured.lock()[0],
        json!({ "answers": [{ "questionId": "q1", "selectedOptionIds": ["o1"] }] })
    );
}

#[tokio::test]
async fn test_assignment_detail_decodes_files_and_criteria() {
    let router = Router::new().route(
        "/api/assignments/{id}",
        get(|| async {
            Json(json!({
                "id": "as1",
                "courseId": "c1",
                "title": "Essay",
                "description": "Write 500 words",
                "module": "Module 2",
                "deadline": "2025-03-15T23:59:00Z",
                "status": "needs_revision",
                "grade": 6,
                "maxGrade": 10,
                "teacherFiles": [{ "id": "f1", "name": "brief.pdf", "url": "/files/brief.pdf" }],
                "criteria": [{ "id": "cr1", "title": "Structure", "max": 5 }],
            }))
        }),
    );
    let api = test_client(&spawn_backend(router).await);

    let detail = api.get_assignment("as1").await;

    assert!(detail.is_live());
    let detail = detail.data();
    assert_eq!(detail.course_id, "c1");
    assert_eq!(detail.status, AssignmentStatus::NeedsRevision);
    assert_eq!(detail.grade, Some(6.0));
    assert_eq!(detail.max_grade, 10.0);
    assert_eq!(detail.teacher_files[0].name, "brief.pdf");
    assert_eq!(detail.criteria[0].title, "Structure");
}

#[tokio::test]
async fn test_assignment_submissions_decode_review_state() {
    let router = Router::new().route(
        "/api/assignments/{id}/submissions",
        get(|| async {
            Json(json!([{
                "id": "s1",
                "createdAt": "2025-03-12T09:30:00Z",
                "status": "on_review",
                "grade": null,
                "files": [{ "id": "f2", "name": "essay.docx", "url": "/files/essay.docx" }],
                "teacherComments": [{
                    "id": "tc1",
                    "author": { "id": "t1", "name": "Teacher" },
                    "createdAt": "2025-03-13T10:00:00Z",
                    "text": "Looks good so far",
                }],
            }]))
        }),
    );
    let api = test_client(&spawn_backend(router).await);

    let submissions = api.get_assignment_submissions("as1").await;

    assert!(submissions.is_live());
    let submission = &submissions.data()[0];
    assert_eq!(submission.status, SubmissionStatus::OnReview);
    assert_eq!(submission.grade, None);
    assert_eq!(submission.comment_from_student, None);
    assert_eq!(submission.files[0].name, "essay.docx");
    assert_eq!(submission.teacher_comments[0].author.name, "Teacher");
}

#[tokio::test]
async fn test_chat_channels_decode_unread_count() {
    let router = Router::new().route(
        "/api/courses/{id}/chat/channels",
        get(|| async { Json(json!([{ "id": "ch_1", "name": "General", "unreadCount": 3 }])) }),
    );
    let api = test_client(&spawn_backend(router).await);

    let channels = api.get_chat_channels("c1").await;

    assert!(channels.is_live());
    assert_eq!(channels.data()[0].name, "General");
    assert_eq!(channels.data()[0].unread_count, 3);
}
