use crate::api::ApiClient;
use crate::error::ApiError;
use crate::types::{TagRequest, TagResponse, TagUpdate};

fn tags_path(project_id: i64, column_id: i64, task_id: i64) -> String {
    format!(
        "/projects/{}/columns/{}/tasks/{}/tags",
        project_id, column_id, task_id
    )
}

pub async fn create_tag(
    api: &ApiClient,
    project_id: i64,
    column_id: i64,
    task_id: i64,
    tag: &TagRequest,
) -> Result<TagResponse, ApiError> {
    api.post(&tags_path(project_id, column_id, task_id), tag).await
}

pub async fn get_tag_by_id(
    api: &ApiClient,
    project_id: i64,
    column_id: i64,
    task_id: i64,
    tag_id: i64,
) -> Result<TagResponse, ApiError> {
    api.get(&format!("{}/{}", tags_path(project_id, column_id, task_id), tag_id))
        .await
}

pub async fn update_tag(
    api: &ApiClient,
    project_id: i64,
    column_id: i64,
    task_id: i64,
    tag_id: i64,
    updated_tag: &TagUpdate,
) -> Result<TagResponse, ApiError> {
    api.put(
        &format!("{}/{}", tags_path(project_id, column_id, task_id), tag_id),
        updated_tag,
    )
    .await
}

pub async fn delete_tag(
    api: &ApiClient,
    project_id: i64,
    column_id: i64,
    task_id: i64,
    tag_id: i64,
) -> Result<(), ApiError> {
    api.delete(&format!("{}/{}", tags_path(project_id, column_id, task_id), tag_id))
        .await
}
