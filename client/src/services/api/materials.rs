//! # Material Endpoints

use serde::de::IgnoredAny;
use shared::{CourseMaterialsResponse, CourseModuleMaterials, MaterialDetail, MaterialProgressUpdate};

use super::client::ApiClient;
use super::endpoints::Endpoint;
use super::fixtures::fixtures;
use super::outcome::{fail_soft, Outcome};

/// Course modules with their materials, unwrapped from the `modules` envelope.
#[tracing::instrument(skip(client))]
pub async fn get_course_materials(client: &ApiClient, course_id: &str) -> Outcome<Vec<CourseModuleMaterials>> {
    let endpoint = Endpoint::CourseMaterials { course_id };
    fail_soft(
        endpoint.name(),
        async {
            client
                .fetch::<CourseMaterialsResponse>(endpoint)
                .await
                .map(|response| response.modules)
        },
        || fixtures().course_materials.clone(),
    )
    .await
}

#[tracing::instrument(skip(client))]
pub async fn get_material(client: &ApiClient, material_id: &str) -> Outcome<MaterialDetail> {
    let endpoint = Endpoint::Material { material_id };
    fail_soft(
        endpoint.name(),
        client.fetch(endpoint),
        || fixtures().material_detail.clone(),
    )
    .await
}

/// Report how far the student got through a material.
#[tracing::instrument(skip(client))]
pub async fn update_material_progress(
    client: &ApiClient,
    material_id: &str,
    view_progress_percent: f64,
    completed: bool,
) -> Outcome<()> {
    let endpoint = Endpoint::MaterialProgress { material_id };
    let body = MaterialProgressUpdate {
        view_progress_percent,
        completed,
    };
    fail_soft(
        endpoint.name(),
        async { client.send::<IgnoredAny, _>(endpoint, &body).await.map(|_| ()) },
        || (),
    )
    .await
}
