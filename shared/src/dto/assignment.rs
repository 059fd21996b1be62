//! # Assignment Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{FileResource, PersonRef};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    NotStarted,
    InProgress,
    Submitted,
    Graded,
    NeedsRevision,
}

/// Status of a single submission; adds `on_review` to the assignment states
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    NotStarted,
    InProgress,
    Submitted,
    OnReview,
    Graded,
    NeedsRevision,
}

/// Row of the course assignments table.
///
/// `module` is a display string; the client relates assignments to modules
/// by comparing it with module titles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentListItem {
    pub id: String,
    pub title: String,
    pub module: String,
    pub deadline: DateTime<Utc>,
    pub status: AssignmentStatus,
    pub grade: Option<f64>,
    pub has_new_comments: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssignmentCriterion {
    pub id: String,
    pub title: String,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDetail {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub description: String,
    pub module: String,
    pub deadline: DateTime<Utc>,
    pub status: AssignmentStatus,
    pub grade: Option<f64>,
    pub max_grade: f64,
    #[serde(default)]
    pub teacher_files: Vec<FileResource>,
    #[serde(default)]
    pub criteria: Vec<AssignmentCriterion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeacherComment {
    pub id: String,
    pub author: PersonRef,
    pub created_at: DateTime<Utc>,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSubmission {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub status: SubmissionStatus,
    pub grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_from_student: Option<String>,
    #[serde(default)]
    pub files: Vec<FileResource>,
    #[serde(default)]
    pub teacher_comments: Vec<TeacherComment>,
}
