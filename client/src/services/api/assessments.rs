//! # Test Endpoints
//!
//! Course tests, test content and attempt submission.

use shared::{CourseTestListItem, TestAttemptAnswer, TestAttemptRequest, TestAttemptResult, TestDetail};

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::fixtures::fixtures;
use super::outcome::{fail_soft, Outcome};

#[tracing::instrument(skip(client))]
pub async fn get_course_tests(client: &ApiClient, course_id: &str) -> Outcome<Vec<CourseTestListItem>> {
    let endpoint = Endpoint::CourseTests { course_id };
    fail_soft(endpoint.name(), client.fetch(endpoint), || fixtures().tests.clone()).await
}

#[tracing::instrument(skip(client))]
pub async fn get_test(client: &ApiClient, test_id: &str) -> Outcome<TestDetail> {
    let endpoint = Endpoint::Test { test_id };
    fail_soft(endpoint.name(), client.fetch(endpoint), || fixtures().test_detail.clone()).await
}

#[tracing::instrument(skip(client, answers), fields(answers = answers.len()))]
pub async fn submit_test(
    client: &ApiClient,
    test_id: &str,
    answers: Vec<TestAttemptAnswer>,
) -> Outcome<TestAttemptResult> {
    let endpoint = Endpoint::SubmitTest { test_id };
    let body = TestAttemptRequest { answers };
    fail_soft(
        endpoint.name(),
        client.send(endpoint, &body),
        || fixtures().test_attempt_result.clone(),
    )
    .await
}
