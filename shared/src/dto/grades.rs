//! # Grade Book Data Transfer Objects

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GradeItemKind {
    Assignment,
    Test,
}

/// Status of a grade-book row. Union of assignment and test states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum GradeStatus {
    NotStarted,
    InProgress,
    Completed,
    Submitted,
    Graded,
    NeedsRevision,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GradeItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: GradeItemKind,
    pub title: String,
    pub module: String,
    pub score: Option<f64>,
    pub max_score: f64,
    pub status: GradeStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseGrades {
    pub course_id: String,
    pub total_score: f64,
    pub max_total_score: f64,
    pub items: Vec<GradeItem>,
}

impl CourseGrades {
    /// Total as a percentage of the maximum, `None` when nothing is gradable yet.
    pub fn total_percent(&self) -> Option<f64> {
        if self.max_total_score > 0.0 {
            Some(self.total_score / self.max_total_score * 100.0)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_percent() {
        let grades = CourseGrades {
            course_id: "c1".to_string(),
            total_score: 37.0,
            max_total_score: 50.0,
            items: vec![],
        };
        assert_eq!(grades.total_percent(), Some(74.0));

        let empty = CourseGrades {
            max_total_score: 0.0,
            ..grades
        };
        assert_eq!(empty.total_percent(), None);
    }
}
