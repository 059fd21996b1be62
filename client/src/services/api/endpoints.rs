//! # Endpoint Table
//!
//! Every backend route the client talks to, with its method and path.
//! Adding a route means adding a variant here; façade operations never build
//! paths by hand.

use reqwest::Method;
use shared::CourseStatusFilter;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Login,
    Signup,
    Me,
    Profile,
    UpdateProfile,
    NotificationSettings,
    UpdateNotificationSettings,
    ChangePassword,
    StudentCourses { status: Option<CourseStatusFilter> },
    CourseOverview { course_id: &'a str },
    CourseMaterials { course_id: &'a str },
    Material { material_id: &'a str },
    MaterialProgress { material_id: &'a str },
    CourseAssignments { course_id: &'a str },
    Assignment { assignment_id: &'a str },
    AssignmentSubmissions { assignment_id: &'a str },
    CreateSubmission { assignment_id: &'a str },
    CourseTests { course_id: &'a str },
    Test { test_id: &'a str },
    SubmitTest { test_id: &'a str },
    ChatChannels { course_id: &'a str },
    ChatMessages { channel_id: &'a str, cursor: Option<&'a str> },
    SendChatMessage { channel_id: &'a str },
    CourseGrades { course_id: &'a str },
    Calendar { from: &'a str, to: &'a str },
    Notifications,
    MarkNotificationRead { notification_id: &'a str },
}

fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        use Endpoint::*;
        match self {
            Login | Signup | ChangePassword | MaterialProgress { .. } | CreateSubmission { .. }
            | SubmitTest { .. } | SendChatMessage { .. } | MarkNotificationRead { .. } => Method::POST,
            UpdateProfile | UpdateNotificationSettings => Method::PUT,
            _ => Method::GET,
        }
    }

    /// Path relative to the API base URL, query string included.
    pub fn path(&self) -> String {
        use Endpoint::*;
        match self {
            Login => "/auth/login".to_string(),
            Signup => "/auth/signup".to_string(),
            Me => "/auth/me".to_string(),
            Profile | UpdateProfile => "/profile".to_string(),
            NotificationSettings | UpdateNotificationSettings => {
                "/profile/notifications-settings".to_string()
            }
            ChangePassword => "/profile/change-password".to_string(),
            StudentCourses { status: None } => "/student/courses".to_string(),
            StudentCourses { status: Some(status) } => {
                format!("/student/courses?status={}", status.as_str())
            }
            CourseOverview { course_id } => format!("/courses/{}/overview", course_id),
            CourseMaterials { course_id } => format!("/courses/{}/materials", course_id),
            Material { material_id } => format!("/materials/{}", material_id),
            MaterialProgress { material_id } => format!("/materials/{}/progress", material_id),
            CourseAssignments { course_id } => format!("/courses/{}/assignments", course_id),
            Assignment { assignment_id } => format!("/assignments/{}", assignment_id),
            AssignmentSubmissions { assignment_id } | CreateSubmission { assignment_id } => {
                format!("/assignments/{}/submissions", assignment_id)
            }
            CourseTests { course_id } => format!("/courses/{}/tests", course_id),
            Test { test_id } => format!("/tests/{}", test_id),
            SubmitTest { test_id } => format!("/tests/{}/attempts", test_id),
            ChatChannels { course_id } => format!("/courses/{}/chat/channels", course_id),
            ChatMessages { channel_id, cursor } => match cursor {
                Some(cursor) if !cursor.is_empty() => format!(
                    "/chat/channels/{}/messages?cursor={}",
                    channel_id,
                    encode(cursor)
                ),
                _ => format!("/chat/channels/{}/messages", channel_id),
            },
            SendChatMessage { channel_id } => format!("/chat/channels/{}/messages", channel_id),
            CourseGrades { course_id } => format!("/courses/{}/grades", course_id),
            Calendar { from, to } => format!("/calendar?from={}&to={}", encode(from), encode(to)),
            Notifications => "/notifications".to_string(),
            MarkNotificationRead { notification_id } => {
                format!("/notifications/{}/read", notification_id)
            }
        }
    }

    /// Operation name used in logs.
    pub fn name(&self) -> &'static str {
        use Endpoint::*;
        match self {
            Login => "login",
            Signup => "signup",
            Me => "me",
            Profile => "get_profile",
            UpdateProfile => "update_profile",
            NotificationSettings => "get_notification_settings",
            UpdateNotificationSettings => "update_notification_settings",
            ChangePassword => "change_password",
            StudentCourses { .. } => "get_student_courses",
            CourseOverview { .. } => "get_course_overview",
            CourseMaterials { .. } => "get_course_materials",
            Material { .. } => "get_material",
            MaterialProgress { .. } => "update_material_progress",
            CourseAssignments { .. } => "get_course_assignments",
            Assignment { .. } => "get_assignment",
            AssignmentSubmissions { .. } => "get_assignment_submissions",
            CreateSubmission { .. } => "create_assignment_submission",
            CourseTests { .. } => "get_course_tests",
            Test { .. } => "get_test",
            SubmitTest { .. } => "submit_test",
            ChatChannels { .. } => "get_chat_channels",
            ChatMessages { .. } => "get_chat_messages",
            SendChatMessage { .. } => "send_chat_message",
            CourseGrades { .. } => "get_course_grades",
            Calendar { .. } => "get_calendar",
            Notifications => "get_notifications",
            MarkNotificationRead { .. } => "mark_notification_read",
        }
    }
}
