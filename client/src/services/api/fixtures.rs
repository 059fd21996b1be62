//! # Fixtures
//!
//! Static fallback payloads, one per record type. Built once per process on
//! first use, with deadlines and timestamps relative to that moment, and never
//! mutated afterwards.

use lib_utils::days_from_now;
use once_cell::sync::Lazy;
use shared::{
    AssignmentCriterion, AssignmentDetail, AssignmentListItem, AssignmentStatus,
    AssignmentSubmission, AuthTokens, AuthUser, CalendarEntity, CalendarEvent, CalendarEventKind,
    ChatChannel, ChatMessage, ChatMessageAuthor, ChatMessagesResponse, CourseGrades,
    CourseModuleMaterials, CourseModuleProgress, CourseOverview, CourseTestListItem,
    DeadlineKind, FileResource, GradeItem, GradeItemKind, GradeStatus, MaterialContent,
    MaterialDetail, MaterialListItem, MaterialType, NotificationEntity, NotificationItem,
    NotificationKind, NotificationSettings, PersonRef, Profile, ProgressStatus, QuestionOption,
    RelatedAssignment, StudentCourse, SubmissionStatus, TeacherComment, TestAttemptResult,
    TestAttemptResultDetail, TestDetail, TestQuestion, UpcomingDeadline, UserRole,
};

pub const MOCK_ACCESS_TOKEN: &str = "mock-access-token";
pub const MOCK_REFRESH_TOKEN: &str = "mock-refresh-token";

const COURSE_TITLE: &str = "Fintech Development Fundamentals";
const INSTRUCTOR: &str = "Anna Smirnova";

/// Every fallback payload served by the façade.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub profile: Profile,
    pub notification_settings: NotificationSettings,
    pub student_courses: Vec<StudentCourse>,
    pub course_overview: CourseOverview,
    pub course_materials: Vec<CourseModuleMaterials>,
    pub material_detail: MaterialDetail,
    pub assignments: Vec<AssignmentListItem>,
    pub assignment_detail: AssignmentDetail,
    pub submissions: Vec<AssignmentSubmission>,
    pub tests: Vec<CourseTestListItem>,
    pub test_detail: TestDetail,
    pub test_attempt_result: TestAttemptResult,
    pub chat_channels: Vec<ChatChannel>,
    pub chat_messages: ChatMessagesResponse,
    pub course_grades: CourseGrades,
    pub calendar_events: Vec<CalendarEvent>,
    pub notifications: Vec<NotificationItem>,
}

static FIXTURES: Lazy<Fixtures> = Lazy::new(Fixtures::build);

/// Process-wide fixture set.
pub fn fixtures() -> &'static Fixtures {
    &FIXTURES
}

impl Fixtures {
    /// Tokens stored when login or signup falls back.
    pub fn tokens(&self) -> AuthTokens {
        AuthTokens {
            access_token: MOCK_ACCESS_TOKEN.to_string(),
            refresh_token: MOCK_REFRESH_TOKEN.to_string(),
        }
    }

    /// Identity derived from the fixture profile.
    pub fn user(&self) -> AuthUser {
        AuthUser {
            id: self.profile.id.clone(),
            name: format!("{} {}", self.profile.first_name, self.profile.last_name),
            email: self.profile.email.clone(),
            role: UserRole::Student,
        }
    }

    /// Submission served when an upload fails.
    pub fn last_submission(&self) -> &AssignmentSubmission {
        // `build` always creates at least one submission.
        &self.submissions[self.submissions.len() - 1]
    }

    fn build() -> Self {
        Self {
            profile: Profile {
                id: "stu_1".to_string(),
                first_name: "Ivan".to_string(),
                last_name: "Ivanov".to_string(),
                email: "ivan@campus.example".to_string(),
                phone: "+7 (999) 123-45-67".to_string(),
                group: "CS-01-25".to_string(),
                university: "Technical University".to_string(),
                enrolled_since: Some(2024),
                completed_courses: Some(2),
                timezone: "Europe/Moscow".to_string(),
            },
            notification_settings: NotificationSettings {
                email_assignments: true,
                email_tests: true,
                email_news: false,
                in_app_reminders: true,
            },
            student_courses: vec![
                StudentCourse {
                    id: "course_1".to_string(),
                    title: COURSE_TITLE.to_string(),
                    description: "Learn the basics of building financial applications".to_string(),
                    instructor: INSTRUCTOR.to_string(),
                    progress_percent: 65.0,
                    status: ProgressStatus::InProgress,
                    next_deadline: Some(days_from_now(2)),
                    badges: vec!["Campus Hackathon".to_string()],
                },
                StudentCourse {
                    id: "course_2".to_string(),
                    title: "Security and Encryption".to_string(),
                    description: "Cryptography and secure development basics".to_string(),
                    instructor: "Sergey Petrov".to_string(),
                    progress_percent: 0.0,
                    status: ProgressStatus::NotStarted,
                    next_deadline: None,
                    badges: Vec::new(),
                },
            ],
            course_overview: CourseOverview {
                id: "course_1".to_string(),
                title: COURSE_TITLE.to_string(),
                description: "Full course description with modules and practice...".to_string(),
                instructor: PersonRef {
                    id: "teacher_1".to_string(),
                    name: INSTRUCTOR.to_string(),
                },
                progress_percent: 65.0,
                modules: vec![
                    CourseModuleProgress {
                        id: "mod_1".to_string(),
                        title: "Introduction to Fintech".to_string(),
                        progress_percent: 100.0,
                        lessons: 5,
                        completed_lessons: 5,
                        status: ProgressStatus::Completed,
                    },
                    CourseModuleProgress {
                        id: "mod_3".to_string(),
                        title: "Security and Encryption".to_string(),
                        progress_percent: 60.0,
                        lessons: 8,
                        completed_lessons: 5,
                        status: ProgressStatus::InProgress,
                    },
                ],
                upcoming_deadlines: vec![
                    UpcomingDeadline {
                        kind: DeadlineKind::Assignment,
                        id: "ass_1".to_string(),
                        title: "HW 3.2: Authentication API".to_string(),
                        deadline: days_from_now(2),
                    },
                    UpcomingDeadline {
                        kind: DeadlineKind::Test,
                        id: "test_1".to_string(),
                        title: "Module 3 test".to_string(),
                        deadline: days_from_now(5),
                    },
                ],
            },
            course_materials: vec![
                CourseModuleMaterials {
                    id: "mod_1".to_string(),
                    title: "Introduction to Fintech".to_string(),
                    items: vec![
                        MaterialListItem {
                            id: "mat_1".to_string(),
                            kind: MaterialType::Video,
                            title: "Meet fintech".to_string(),
                            duration_minutes: Some(12),
                            status: ProgressStatus::Completed,
                            view_progress_percent: None,
                        },
                        MaterialListItem {
                            id: "mat_2".to_string(),
                            kind: MaterialType::Text,
                            title: "A short history of fintech".to_string(),
                            duration_minutes: None,
                            status: ProgressStatus::Completed,
                            view_progress_percent: None,
                        },
                    ],
                },
                CourseModuleMaterials {
                    id: "mod_3".to_string(),
                    title: "Security and Encryption".to_string(),
                    items: vec![MaterialListItem {
                        id: "mat_21".to_string(),
                        kind: MaterialType::Video,
                        title: "Encryption basics".to_string(),
                        duration_minutes: Some(20),
                        status: ProgressStatus::InProgress,
                        view_progress_percent: Some(60.0),
                    }],
                },
            ],
            material_detail: MaterialDetail {
                id: "mat_21".to_string(),
                course_id: "course_1".to_string(),
                module_id: "mod_3".to_string(),
                title: "Encryption basics".to_string(),
                description: Some("Walkthrough of the core ideas of encryption...".to_string()),
                status: ProgressStatus::InProgress,
                view_progress_percent: Some(60.0),
                related_assignments: vec![RelatedAssignment {
                    id: "ass_1".to_string(),
                    title: "HW: Authentication API".to_string(),
                }],
                body: MaterialContent::Video {
                    video_url: "https://example.com/mock-video.mp4".to_string(),
                    transcript: Some("Video transcript...".to_string()),
                },
            },
            assignments: vec![
                AssignmentListItem {
                    id: "ass_1".to_string(),
                    title: "HW 3.2: Authentication API".to_string(),
                    module: "Module 3".to_string(),
                    deadline: days_from_now(2),
                    status: AssignmentStatus::Submitted,
                    grade: None,
                    has_new_comments: true,
                },
                AssignmentListItem {
                    id: "ass_2".to_string(),
                    title: "HW 2.1: Database design".to_string(),
                    module: "Module 2".to_string(),
                    deadline: days_from_now(-1),
                    status: AssignmentStatus::Graded,
                    grade: Some(9.0),
                    has_new_comments: false,
                },
            ],
            assignment_detail: AssignmentDetail {
                id: "ass_1".to_string(),
                course_id: "course_1".to_string(),
                title: "HW 3.2: Authentication API".to_string(),
                description: "Build a REST API for student authentication (signup, login, refresh)."
                    .to_string(),
                module: "Module 3".to_string(),
                deadline: days_from_now(2),
                status: AssignmentStatus::Submitted,
                grade: None,
                max_grade: 10.0,
                teacher_files: vec![FileResource {
                    id: "file_t1".to_string(),
                    name: "brief.pdf".to_string(),
                    url: "https://example.com/brief.pdf".to_string(),
                }],
                criteria: vec![
                    criterion("crit_1", "API correctness", 4.0),
                    criterion("crit_2", "Code structure", 3.0),
                    criterion("crit_3", "Documentation", 3.0),
                ],
            },
            submissions: vec![
                AssignmentSubmission {
                    id: "sub_1".to_string(),
                    created_at: days_from_now(-3),
                    status: SubmissionStatus::Graded,
                    grade: Some(7.0),
                    comment_from_student: Some("First version".to_string()),
                    files: vec![FileResource {
                        id: "file_1".to_string(),
                        name: "hw_v1.zip".to_string(),
                        url: "https://example.com/hw_v1.zip".to_string(),
                    }],
                    teacher_comments: vec![TeacherComment {
                        id: "tc_1".to_string(),
                        author: PersonRef {
                            id: "teacher_1".to_string(),
                            name: INSTRUCTOR.to_string(),
                        },
                        created_at: days_from_now(-2),
                        text: "Please add error handling.".to_string(),
                    }],
                },
                AssignmentSubmission {
                    id: "sub_2".to_string(),
                    created_at: days_from_now(-1),
                    status: SubmissionStatus::Submitted,
                    grade: None,
                    comment_from_student: Some("Added error handling".to_string()),
                    files: vec![FileResource {
                        id: "file_2".to_string(),
                        name: "hw_v2.zip".to_string(),
                        url: "https://example.com/hw_v2.zip".to_string(),
                    }],
                    teacher_comments: Vec::new(),
                },
            ],
            tests: vec![CourseTestListItem {
                id: "test_1".to_string(),
                title: "Module 3 test".to_string(),
                module: "Module 3".to_string(),
                deadline: days_from_now(5),
                status: ProgressStatus::NotStarted,
                attempts_used: 0,
                attempts_limit: 3,
                best_score_percent: None,
            }],
            test_detail: TestDetail {
                id: "test_1".to_string(),
                title: "Module 3 test".to_string(),
                time_limit_minutes: Some(20),
                questions: vec![
                    TestQuestion::SingleChoice {
                        id: "q1".to_string(),
                        text: "What is a token?".to_string(),
                        options: vec![
                            option("o1", "A string that proves authentication"),
                            option("o2", "A sorting algorithm"),
                        ],
                    },
                    TestQuestion::MultipleChoice {
                        id: "q2".to_string(),
                        text: "Pick the true statements about OAuth2".to_string(),
                        options: vec![
                            option("o1", "It is used for authorization"),
                            option("o2", "It is a database"),
                            option("o3", "It can work with JWT"),
                        ],
                    },
                ],
            },
            test_attempt_result: TestAttemptResult {
                attempt_id: "att_1".to_string(),
                score_percent: 86.0,
                passed: true,
                details: vec![
                    TestAttemptResultDetail {
                        question_id: "q1".to_string(),
                        correct: true,
                    },
                    TestAttemptResultDetail {
                        question_id: "q2".to_string(),
                        correct: false,
                    },
                ],
            },
            chat_channels: vec![
                ChatChannel {
                    id: "ch_general".to_string(),
                    name: "Course chat".to_string(),
                    unread_count: 2,
                },
                ChatChannel {
                    id: "ch_homework".to_string(),
                    name: "Homework questions".to_string(),
                    unread_count: 0,
                },
            ],
            chat_messages: ChatMessagesResponse {
                messages: vec![
                    ChatMessage {
                        id: "msg_1".to_string(),
                        author: ChatMessageAuthor {
                            id: "teacher_1".to_string(),
                            name: "Anna".to_string(),
                            role: UserRole::Teacher,
                        },
                        text: "Reminder: homework is due on Friday.".to_string(),
                        created_at: days_from_now(-1),
                    },
                    ChatMessage {
                        id: "msg_2".to_string(),
                        author: ChatMessageAuthor {
                            id: "stu_1".to_string(),
                            name: "Ivan".to_string(),
                            role: UserRole::Student,
                        },
                        text: "Could the deadline be extended?".to_string(),
                        created_at: days_from_now(-1),
                    },
                ],
                next_cursor: None,
            },
            course_grades: CourseGrades {
                course_id: "course_1".to_string(),
                total_score: 37.0,
                max_total_score: 50.0,
                items: vec![
                    GradeItem {
                        id: "ass_1".to_string(),
                        kind: GradeItemKind::Assignment,
                        title: "HW 3.2".to_string(),
                        module: "Module 3".to_string(),
                        score: Some(7.0),
                        max_score: 10.0,
                        status: GradeStatus::Graded,
                    },
                    GradeItem {
                        id: "test_1".to_string(),
                        kind: GradeItemKind::Test,
                        title: "Module 3 test".to_string(),
                        module: "Module 3".to_string(),
                        score: Some(9.0),
                        max_score: 10.0,
                        status: GradeStatus::Graded,
                    },
                ],
            },
            calendar_events: vec![
                CalendarEvent {
                    id: "ev_1".to_string(),
                    date: days_from_now(2),
                    title: "HW 3.2: API".to_string(),
                    kind: CalendarEventKind::Assignment,
                    course: COURSE_TITLE.to_string(),
                    entity_type: CalendarEntity::Assignment,
                    entity_id: "ass_1".to_string(),
                },
                CalendarEvent {
                    id: "ev_2".to_string(),
                    date: days_from_now(5),
                    title: "Module 3 test".to_string(),
                    kind: CalendarEventKind::Test,
                    course: COURSE_TITLE.to_string(),
                    entity_type: CalendarEntity::Test,
                    entity_id: "test_1".to_string(),
                },
            ],
            notifications: vec![
                NotificationItem {
                    id: "n1".to_string(),
                    kind: NotificationKind::AssignmentComment,
                    title: "New homework comment".to_string(),
                    body: "Your teacher commented on HW 3.2".to_string(),
                    entity_type: NotificationEntity::Assignment,
                    entity_id: "ass_1".to_string(),
                    course_id: Some("course_1".to_string()),
                    created_at: days_from_now(-1),
                    read: false,
                },
                NotificationItem {
                    id: "n2".to_string(),
                    kind: NotificationKind::TestGraded,
                    title: "Test graded".to_string(),
                    body: "You scored 9 out of 10".to_string(),
                    entity_type: NotificationEntity::Test,
                    entity_id: "test_1".to_string(),
                    course_id: Some("course_1".to_string()),
                    created_at: days_from_now(-1),
                    read: true,
                },
            ],
        }
    }
}

fn criterion(id: &str, title: &str, max: f64) -> AssignmentCriterion {
    AssignmentCriterion {
        id: id.to_string(),
        title: title.to_string(),
        max,
    }
}

fn option(id: &str, text: &str) -> QuestionOption {
    QuestionOption {
        id: id.to_string(),
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::unread_count;

    #[test]
    fn test_fixtures_are_built_once() {
        assert!(std::ptr::eq(fixtures(), fixtures()));
        assert_eq!(fixtures().course_overview, fixtures().course_overview);
    }

    #[test]
    fn test_fixture_notifications_have_one_unread() {
        assert_eq!(unread_count(&fixtures().notifications), 1);
    }

    #[test]
    fn test_last_submission_is_sub_2() {
        assert_eq!(fixtures().last_submission().id, "sub_2");
    }

    #[test]
    fn test_fixture_user_matches_profile() {
        let user = fixtures().user();
        assert_eq!(user.id, "stu_1");
        assert_eq!(user.name, "Ivan Ivanov");
        assert_eq!(user.role, UserRole::Student);
    }

    #[test]
    fn test_deadlines_are_relative_to_now() {
        let overview = &fixtures().course_overview;
        assert!(overview
            .upcoming_deadlines
            .iter()
            .all(|d| d.deadline > lib_utils::now_utc() - chrono::Duration::minutes(1)));
    }
}
