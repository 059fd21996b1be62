//! # Calendar Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalendarEventKind {
    Assignment,
    Test,
    Lecture,
    Other,
}

/// Record a calendar event links to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CalendarEntity {
    Assignment,
    Test,
    Material,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub date: DateTime<Utc>,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: CalendarEventKind,
    pub course: String,
    pub entity_type: CalendarEntity,
    pub entity_id: String,
}
