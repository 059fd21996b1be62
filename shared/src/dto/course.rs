//! # Course Data Transfer Objects
//!
//! Student course list, course overview and the progress status shared by
//! courses, modules, materials and tests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::PersonRef;

/// Progress of a course, module, material or test
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ProgressStatus {
    NotStarted,
    InProgress,
    Completed,
}

pub type CourseStatus = ProgressStatus;

/// Filter accepted by `GET /student/courses?status=`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CourseStatusFilter {
    Active,
    Completed,
    All,
}

impl CourseStatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatusFilter::Active => "active",
            CourseStatusFilter::Completed => "completed",
            CourseStatusFilter::All => "all",
        }
    }
}

impl std::str::FromStr for CourseStatusFilter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "active" => Ok(CourseStatusFilter::Active),
            "completed" => Ok(CourseStatusFilter::Completed),
            "all" => Ok(CourseStatusFilter::All),
            other => Err(format!("unknown course status filter: {}", other)),
        }
    }
}

/// Course card on the "my courses" page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StudentCourse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub progress_percent: f64,
    pub status: CourseStatus,
    pub next_deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub badges: Vec<String>,
}

/// Per-module progress inside a course overview
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseModuleProgress {
    pub id: String,
    pub title: String,
    pub progress_percent: f64,
    pub lessons: u32,
    pub completed_lessons: u32,
    pub status: CourseStatus,
}

/// What an upcoming deadline belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeadlineKind {
    Assignment,
    Test,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpcomingDeadline {
    #[serde(rename = "type")]
    pub kind: DeadlineKind,
    pub id: String,
    pub title: String,
    pub deadline: DateTime<Utc>,
}

/// Course landing page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseOverview {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor: PersonRef,
    pub progress_percent: f64,
    pub modules: Vec<CourseModuleProgress>,
    pub upcoming_deadlines: Vec<UpcomingDeadline>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_course_from_camel_case() {
        let raw = r#"{
            "id": "c1", "title": "Rust", "description": "Ownership", "instructor": "Ann",
            "progressPercent": 40, "status": "in_progress",
            "nextDeadline": "2026-01-10T12:00:00Z", "badges": ["hackathon"]
        }"#;
        let course: StudentCourse = serde_json::from_str(raw).unwrap();
        assert_eq!(course.status, ProgressStatus::InProgress);
        assert_eq!(course.progress_percent, 40.0);
        assert!(course.next_deadline.is_some());
        assert_eq!(course.badges, vec!["hackathon".to_string()]);
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("active".parse::<CourseStatusFilter>(), Ok(CourseStatusFilter::Active));
        assert!("archived".parse::<CourseStatusFilter>().is_err());
        assert_eq!(CourseStatusFilter::All.as_str(), "all");
    }
}
