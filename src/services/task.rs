use crate::api::ApiClient;
use crate::error::ApiError;
use crate::types::{TaskRequest, TaskResponse, TaskUpdate};

fn tasks_path(project_id: i64, column_id: i64) -> String {
    format!("/projects/{}/columns/{}/tasks", project_id, column_id)
}

pub async fn create_task(
    api: &ApiClient,
    project_id: i64,
    column_id: i64,
    task: &TaskRequest,
) -> Result<TaskResponse, ApiError> {
    api.post(&tasks_path(project_id, column_id), task)
        .await
        .inspect_err(|e| tracing::error!("create_task failed: {}", e))
}

pub async fn get_task_by_id(
    api: &ApiClient,
    project_id: i64,
    column_id: i64,
    task_id: i64,
) -> Result<TaskResponse, ApiError> {
    api.get(&format!("{}/{}", tasks_path(project_id, column_id), task_id))
        .await
        .inspect_err(|e| tracing::error!("get_task_by_id failed: {}", e))
}

pub async fn update_task(
    api: &ApiClient,
    project_id: i64,
    column_id: i64,
    task_id: i64,
    updated_task: &TaskUpdate,
) -> Result<TaskResponse, ApiError> {
    api.put(&format!("{}/{}", tasks_path(project_id, column_id), task_id), updated_task)
        .await
        .inspect_err(|e| tracing::error!("update_task failed: {}", e))
}

pub async fn delete_task(
    api: &ApiClient,
    project_id: i64,
    column_id: i64,
    task_id: i64,
) -> Result<(), ApiError> {
    api.delete(&format!("{}/{}", tasks_path(project_id, column_id), task_id))
        .await
        .inspect_err(|e| tracing::error!("delete_task failed: {}", e))
}
