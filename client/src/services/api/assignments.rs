//! # Assignment Endpoints
//!
//! Assignment lists, details, submission history and submission upload.
//!
//! Uploads are multipart, so they skip the JSON transport and build their own
//! request (bearer token included) on the shared HTTP client.

use std::path::Path;
use std::time::Instant;

use reqwest::multipart::{Form, Part};
use shared::{AssignmentDetail, AssignmentListItem, AssignmentSubmission};

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::fixtures::fixtures;
use super::outcome::{fail_soft, Outcome};
use super::transport::TransportError;
use crate::core::error::{AppError, Result};

/// One file attached to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub mime: Option<String>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
            mime: None,
        }
    }

    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Read a file from disk, keeping only its file name.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::Api(format!("Cannot read {}: {}", path.display(), e)))?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(name, bytes))
    }
}

/// Files and optional comment for a new submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub comment: Option<String>,
    pub files: Vec<UploadFile>,
}

impl SubmissionDraft {
    pub fn new(files: Vec<UploadFile>) -> Self {
        Self { comment: None, files }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Multipart body: `comment` when non-empty, then one `files[]` part per file.
    pub(crate) fn to_form(&self) -> std::result::Result<Form, TransportError> {
        let mut form = Form::new();
        if let Some(comment) = self.comment.as_deref().filter(|c| !c.is_empty()) {
            form = form.text("comment", comment.to_string());
        }
        for file in &self.files {
            let mut part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
            if let Some(mime) = &file.mime {
                part = part
                    .mime_str(mime)
                    .map_err(|e| TransportError::new(None, format!("Invalid MIME type '{}': {}", mime, e)))?;
            }
            form = form.part("files[]", part);
        }
        Ok(form)
    }
}

#[tracing::instrument(skip(client))]
pub async fn get_course_assignments(client: &ApiClient, course_id: &str) -> Outcome<Vec<AssignmentListItem>> {
    let endpoint = Endpoint::CourseAssignments { course_id };
    fail_soft(endpoint.name(), client.fetch(endpoint), || fixtures().assignments.clone()).await
}

#[tracing::instrument(skip(client))]
pub async fn get_assignment(client: &ApiClient, assignment_id: &str) -> Outcome<AssignmentDetail> {
    let endpoint = Endpoint::Assignment { assignment_id };
    fail_soft(
        endpoint.name(),
        client.fetch(endpoint),
        || fixtures().assignment_detail.clone(),
    )
    .await
}

#[tracing::instrument(skip(client))]
pub async fn get_assignment_submissions(
    client: &ApiClient,
    assignment_id: &str,
) -> Outcome<Vec<AssignmentSubmission>> {
    let endpoint = Endpoint::AssignmentSubmissions { assignment_id };
    fail_soft(endpoint.name(), client.fetch(endpoint), || fixtures().submissions.clone()).await
}

/// Upload a new submission.
///
/// On failure the last fixture submission is returned unchanged.
#[tracing::instrument(skip(client, draft), fields(files = draft.files.len()))]
pub async fn create_assignment_submission(
    client: &ApiClient,
    assignment_id: &str,
    draft: &SubmissionDraft,
) -> Outcome<AssignmentSubmission> {
    let endpoint = Endpoint::CreateSubmission { assignment_id };
    fail_soft(
        endpoint.name(),
        upload(client, endpoint, draft),
        || fixtures().last_submission().clone(),
    )
    .await
}

async fn upload(
    client: &ApiClient,
    endpoint: Endpoint<'_>,
    draft: &SubmissionDraft,
) -> std::result::Result<AssignmentSubmission, TransportError> {
    let form = draft.to_form()?;
    let transport = client.transport();
    let timeout = transport.default_timeout();
    let start = Instant::now();

    let response = transport
        .authorized(endpoint.method(), &endpoint.path())
        .multipart(form)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| TransportError::from_reqwest(e, timeout))?;

    let status = response.status();
    tracing::debug!(
        status = status.as_u16(),
        duration_ms = start.elapsed().as_millis(),
        "Upload response received"
    );

    if !status.is_success() {
        return Err(TransportError::new(
            Some(status.as_u16()),
            format!("HTTP {}", status.as_u16()),
        ));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| TransportError::from_reqwest(e, timeout))?;

    serde_json::from_slice(&bytes).map_err(|e| {
        TransportError::new(
            Some(status.as_u16()),
            format!("Failed to parse response: {}", e),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path_reads_name_and_bytes() {
        let path = std::env::temp_dir().join(format!("lms-upload-{}.zip", uuid::Uuid::new_v4()));
        std::fs::write(&path, b"PK").unwrap();

        let file = UploadFile::from_path(&path).unwrap();
        assert_eq!(file.bytes, b"PK".to_vec());
        assert!(file.name.starts_with("lms-upload-"));
        assert!(file.name.ends_with(".zip"));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_from_path_missing_file_is_api_error() {
        let err = UploadFile::from_path("/definitely/not/here.zip").unwrap_err();
        assert!(matches!(err, AppError::Api(_)));
    }

    #[test]
    fn test_invalid_mime_is_rejected() {
        let draft = SubmissionDraft::new(vec![UploadFile::new("a.zip", b"x".to_vec()).with_mime("not a mime")]);
        assert!(draft.to_form().is_err());
    }
}
