use crate::api::ApiClient;
use crate::error::ApiError;
use crate::types::{ProjectRequest, ProjectResponse, UserProjectRequest};

pub async fn get_project_by_id(
    api: &ApiClient,
    project_id: i64,
) -> Result<ProjectResponse, ApiError> {
    api.get(&format!("/projects/{}", project_id)).await
}

pub async fn create_project(
    api: &ApiClient,
    project: &ProjectRequest,
) -> Result<ProjectResponse, ApiError> {
    api.post("/projects/create", project).await
}

pub async fn update_project(
    api: &ApiClient,
    project_id: i64,
    project: &ProjectRequest,
) -> Result<ProjectResponse, ApiError> {
    api.put(&format!("/projects/{}", project_id), project).await
}

pub async fn delete_project(api: &ApiClient, project_id: i64) -> Result<(), ApiError> {
    api.delete(&format!("/projects/{}", project_id)).await
}

pub async fn add_user_to_project(
    api: &ApiClient,
    project_id: i64,
    membership: &UserProjectRequest,
) -> Result<(), ApiError> {
    api.post_unit(&format!("/projects/{}/adduser", project_id), membership)
        .await
}
