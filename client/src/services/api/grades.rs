//! # Grade Book Endpoint

use shared::CourseGrades;

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::fixtures::fixtures;
use super::outcome::{fail_soft, Outcome};

#[tracing::instrument(skip(client))]
pub async fn get_course_grades(client: &ApiClient, course_id: &str) -> Outcome<CourseGrades> {
    let endpoint = Endpoint::CourseGrades { course_id };
    fail_soft(endpoint.name(), client.fetch(endpoint), || fixtures().course_grades.clone()).await
}
