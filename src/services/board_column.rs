use crate::api::ApiClient;
use crate::error::ApiError;
use crate::types::{BoardColumnRequest, BoardColumnResponse, BoardColumnUpdate, ProjectResponse};

pub async fn create_column(
    api: &ApiClient,
    project_id: i64,
    column: &BoardColumnRequest,
) -> Result<BoardColumnResponse, ApiError> {
    api.post(&format!("/projects/{}/columns", project_id), column)
        .await
}

pub async fn get_column_by_id(
    api: &ApiClient,
    project_id: i64,
    column_id: i64,
) -> Result<BoardColumnResponse, ApiError> {
    api.get(&format!("/projects/{}/columns/{}", project_id, column_id))
        .await
}

pub async fn update_column(
    api: &ApiClient,
    project_id: i64,
    column_id: i64,
    data: &BoardColumnUpdate,
) -> Result<BoardColumnResponse, ApiError> {
    api.put(&format!("/projects/{}/columns/{}", project_id, column_id), data)
        .await
}

/// Deleting a column answers with the refreshed project.
pub async fn delete_column(
    api: &ApiClient,
    project_id: i64,
    column_id: i64,
) -> Result<ProjectResponse, ApiError> {
    api.delete_json(&format!("/projects/{}/columns/{}", project_id, column_id))
        .await
}
