//! # Material Data Transfer Objects
//!
//! Learning materials come in four kinds (video, text, file, SCORM package).
//! The list view carries only the kind; the detail view carries the fields
//! valid for that kind through [`MaterialContent`], keyed on the `type` field.

use serde::{Deserialize, Serialize};

use super::{FileResource, ProgressStatus};

pub type MaterialStatus = ProgressStatus;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    Video,
    Text,
    File,
    Scorm,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaterialListItem {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: MaterialType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    pub status: MaterialStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_progress_percent: Option<f64>,
}

/// One course module with its materials
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseModuleMaterials {
    pub id: String,
    pub title: String,
    pub items: Vec<MaterialListItem>,
}

/// Envelope of `GET /courses/{id}/materials`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseMaterialsResponse {
    pub modules: Vec<CourseModuleMaterials>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelatedAssignment {
    pub id: String,
    pub title: String,
}

/// Kind-specific part of a material detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MaterialContent {
    #[serde(rename_all = "camelCase")]
    Video {
        video_url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        transcript: Option<String>,
    },
    Text {
        content: String,
    },
    File {
        files: Vec<FileResource>,
    },
    #[serde(rename_all = "camelCase")]
    Scorm {
        launch_url: String,
    },
}

impl MaterialContent {
    pub fn kind(&self) -> MaterialType {
        match self {
            MaterialContent::Video { .. } => MaterialType::Video,
            MaterialContent::Text { .. } => MaterialType::Text,
            MaterialContent::File { .. } => MaterialType::File,
            MaterialContent::Scorm { .. } => MaterialType::Scorm,
        }
    }
}

/// Material page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDetail {
    pub id: String,
    pub course_id: String,
    pub module_id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: MaterialStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view_progress_percent: Option<f64>,
    #[serde(default)]
    pub related_assignments: Vec<RelatedAssignment>,
    #[serde(flatten)]
    pub body: MaterialContent,
}

/// Body of `POST /materials/{id}/progress`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MaterialProgressUpdate {
    pub view_progress_percent: f64,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_detail_keeps_video_fields() {
        let raw = r#"{
            "id": "m1", "courseId": "c1", "moduleId": "mod1", "type": "video",
            "title": "Intro", "status": "in_progress", "viewProgressPercent": 60,
            "videoUrl": "https://cdn.example/v.mp4", "transcript": "hello"
        }"#;
        let detail: MaterialDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.body.kind(), MaterialType::Video);
        assert_eq!(
            detail.body,
            MaterialContent::Video {
                video_url: "https://cdn.example/v.mp4".to_string(),
                transcript: Some("hello".to_string()),
            }
        );
        assert!(detail.related_assignments.is_empty());
    }

    #[test]
    fn test_scorm_detail_requires_launch_url() {
        let raw = r#"{
            "id": "m2", "courseId": "c1", "moduleId": "mod1", "type": "scorm",
            "title": "Package", "status": "not_started"
        }"#;
        assert!(serde_json::from_str::<MaterialDetail>(raw).is_err());
    }

    #[test]
    fn test_detail_serializes_type_tag() {
        let detail = MaterialDetail {
            id: "m3".to_string(),
            course_id: "c1".to_string(),
            module_id: "mod1".to_string(),
            title: "Reading".to_string(),
            description: None,
            status: ProgressStatus::Completed,
            view_progress_percent: None,
            related_assignments: vec![],
            body: MaterialContent::Text {
                content: "# Notes".to_string(),
            },
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["content"], "# Notes");
        assert_eq!(json["courseId"], "c1");
    }
}
