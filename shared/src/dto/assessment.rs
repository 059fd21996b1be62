//! # Test (Assessment) Data Transfer Objects
//!
//! Questions are keyed on `type` (`single_choice`, `multiple_choice`,
//! `matching`); answers are told apart by their shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ProgressStatus;

pub type TestStatus = ProgressStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseTestListItem {
    pub id: String,
    pub title: String,
    pub module: String,
    pub deadline: DateTime<Utc>,
    pub status: TestStatus,
    pub attempts_used: u32,
    pub attempts_limit: u32,
    pub best_score_percent: Option<f64>,
}

impl CourseTestListItem {
    pub fn attempts_left(&self) -> u32 {
        self.attempts_limit.saturating_sub(self.attempts_used)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
}

/// One side of a matching question
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchingItem {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TestQuestion {
    SingleChoice {
        id: String,
        text: String,
        options: Vec<QuestionOption>,
    },
    MultipleChoice {
        id: String,
        text: String,
        options: Vec<QuestionOption>,
    },
    #[serde(rename_all = "camelCase")]
    Matching {
        id: String,
        text: String,
        left_items: Vec<MatchingItem>,
        right_items: Vec<MatchingItem>,
    },
}

impl TestQuestion {
    pub fn id(&self) -> &str {
        match self {
            TestQuestion::SingleChoice { id, .. }
            | TestQuestion::MultipleChoice { id, .. }
            | TestQuestion::Matching { id, .. } => id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TestQuestion::SingleChoice { text, .. }
            | TestQuestion::MultipleChoice { text, .. }
            | TestQuestion::Matching { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestDetail {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_minutes: Option<u32>,
    pub questions: Vec<TestQuestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchPair {
    pub left_id: String,
    pub right_id: String,
}

/// Answer to one question: selected options, or left/right pairs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TestAttemptAnswer {
    #[serde(rename_all = "camelCase")]
    Choice {
        question_id: String,
        selected_option_ids: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Matching {
        question_id: String,
        matches: Vec<MatchPair>,
    },
}

impl TestAttemptAnswer {
    pub fn question_id(&self) -> &str {
        match self {
            TestAttemptAnswer::Choice { question_id, .. }
            | TestAttemptAnswer::Matching { question_id, .. } => question_id,
        }
    }
}

/// Body of `POST /tests/{id}/attempts`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TestAttemptRequest {
    pub answers: Vec<TestAttemptAnswer>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TestAttemptResultDetail {
    pub question_id: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestAttemptResult {
    pub attempt_id: String,
    pub score_percent: f64,
    pub passed: bool,
    pub details: Vec<TestAttemptResultDetail>,
}
