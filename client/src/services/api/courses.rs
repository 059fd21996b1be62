//! # Course Endpoints

use shared::{CourseOverview, CourseStatusFilter, StudentCourse};

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::fixtures::fixtures;
use super::outcome::{fail_soft, Outcome};

/// Courses the student is enrolled in, optionally filtered by status.
#[tracing::instrument(skip(client))]
pub async fn get_student_courses(
    client: &ApiClient,
    status: Option<CourseStatusFilter>,
) -> Outcome<Vec<StudentCourse>> {
    let endpoint = Endpoint::StudentCourses { status };
    fail_soft(
        endpoint.name(),
        client.fetch(endpoint),
        || fixtures().student_courses.clone(),
    )
    .await
}

#[tracing::instrument(skip(client))]
pub async fn get_course_overview(client: &ApiClient, course_id: &str) -> Outcome<CourseOverview> {
    let endpoint = Endpoint::CourseOverview { course_id };
    fail_soft(
        endpoint.name(),
        client.fetch(endpoint),
        || fixtures().course_overview.clone(),
    )
    .await
}
