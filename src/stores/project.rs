use crate::api::ApiClient;
use crate::error::{ApiError, UserFacingError};
use crate::services;
use crate::types::{
    BoardColumnRequest, BoardColumnResponse, BoardColumnUpdate, ProjectRequest, ProjectResponse,
    TagRequest, TagUpdate, TaskRequest, TaskResponse, TaskUpdate,
};

/// State of the currently mounted project board. Overlapping updates are
/// last-writer-wins; the server stays authoritative and `fetch_project_by_id`
/// resynchronizes.
pub struct ProjectStore {
    api: ApiClient,
    pub project: Option<ProjectResponse>,
    pub is_loading: bool,
    pub error: Option<UserFacingError>,
}

impl ProjectStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            project: None,
            is_loading: false,
            error: None,
        }
    }

    pub fn reset_error(&mut self) {
        self.error = None;
    }

    fn record_error(&mut self, action: &str, err: ApiError) {
        tracing::error!("{} failed: {}", action, err);
        self.error = Some(err.user_facing());
    }

    fn project_id(&self) -> Result<i64, ApiError> {
        self.project
            .as_ref()
            .map(|p| p.id)
            .ok_or_else(|| ApiError::Unexpected("Project ID est introuvable.".to_string()))
    }

    fn find_column(&mut self, column_id: i64) -> Option<&mut BoardColumnResponse> {
        self.project
            .as_mut()?
            .columns
            .iter_mut()
            .find(|col| col.id == column_id)
    }

    fn find_task(&mut self, column_id: i64, task_id: i64) -> Option<&mut TaskResponse> {
        self.find_column(column_id)?
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
    }

    /// Create a project and make it the mounted one. Returns its id for
    /// navigation to the board view.
    pub async fn add_project(&mut self, project: &ProjectRequest) -> Option<i64> {
        self.is_loading = true;
        self.reset_error();
        let result = services::project::create_project(&self.api, project).await;
        self.is_loading = false;
        match result {
            Ok(response) => {
                let id = response.id;
                self.project = Some(response);
                Some(id)
            }
            Err(e) => {
                self.record_error("create project", e);
                None
            }
        }
    }

    pub async fn fetch_project_by_id(&mut self, project_id: i64) {
        self.is_loading = true;
        self.reset_error();
        let result = services::project::get_project_by_id(&self.api, project_id).await;
        self.is_loading = false;
        match result {
            Ok(response) => self.project = Some(response),
            Err(e) => self.record_error("fetch project", e),
        }
    }

    /// Create a column, then refetch the project so ordering and server-side
    /// defaults are reflected.
    pub async fn add_column(&mut self, column: &BoardColumnRequest) {
        match services::board_column::create_column(&self.api, column.project_id, column).await {
            Ok(response) => {
                if let Some(project) = &mut self.project {
                    project.columns.push(response);
                }
                self.fetch_project_by_id(column.project_id).await;
            }
            Err(e) => self.record_error("create column", e),
        }
    }

    pub async fn update_column_name(&mut self, column_id: i64, name: &str) {
        let project_id = match self.project_id() {
            Ok(id) => id,
            Err(e) => return self.record_error("rename column", e),
        };
        let update = BoardColumnUpdate {
            name: Some(name.to_string()),
        };
        match services::board_column::update_column(&self.api, project_id, column_id, &update).await
        {
            Ok(_) => {
                if let Some(column) = self.find_column(column_id) {
                    column.name = name.to_string();
                }
            }
            Err(e) => self.record_error("rename column", e),
        }
    }

    /// The delete endpoint answers with the refreshed project; adopt it.
    pub async fn remove_column(&mut self, column_id: i64) {
        let project_id = match self.project_id() {
            Ok(id) => id,
            Err(e) => return self.record_error("delete column", e),
        };
        match services::board_column::delete_column(&self.api, project_id, column_id).await {
            Ok(response) => self.project = Some(response),
            Err(e) => self.record_error("delete column", e),
        }
    }

    pub async fn add_task(&mut self, column_id: i64, task: &TaskRequest) {
        let project_id = match self.project_id() {
            Ok(id) => id,
            Err(e) => return self.record_error("create task", e),
        };
        match services::task::create_task(&self.api, project_id, column_id, task).await {
            Ok(response) => {
                if let Some(column) = self.find_column(column_id) {
                    column.tasks.push(response);
                }
            }
            Err(e) => self.record_error("create task", e),
        }
    }

    pub async fn update_task_details(
        &mut self,
        column_id: i64,
        task_id: i64,
        updated_task: &TaskUpdate,
    ) {
        let project_id = match self.project_id() {
            Ok(id) => id,
            Err(e) => return self.record_error("update task", e),
        };
        match services::task::update_task(&self.api, project_id, column_id, task_id, updated_task)
            .await
        {
            Ok(response) => {
                if let Some(task) = self.find_task(column_id, task_id) {
                    *task = response;
                }
            }
            Err(e) => self.record_error("update task", e),
        }
    }

    /// Removes exactly one task from the column, matched by id.
    pub async fn remove_task(&mut self, column_id: i64, task_id: i64) {
        let project_id = match self.project_id() {
            Ok(id) => id,
            Err(e) => return self.record_error("delete task", e),
        };
        match services::task::delete_task(&self.api, project_id, column_id, task_id).await {
            Ok(()) => {
                if let Some(column) = self.find_column(column_id) {
                    if let Some(pos) = column.tasks.iter().position(|t| t.id == task_id) {
                        column.tasks.remove(pos);
                    }
                }
            }
            Err(e) => self.record_error("delete task", e),
        }
    }

    pub async fn add_tag(&mut self, column_id: i64, task_id: i64, tag: &TagRequest) {
        let project_id = match self.project_id() {
            Ok(id) => id,
            Err(e) => return self.record_error("create tag", e),
        };
        match services::tag::create_tag(&self.api, project_id, column_id, task_id, tag).await {
            Ok(response) => {
                if let Some(task) = self.find_task(column_id, task_id) {
                    task.tags.push(response);
                }
            }
            Err(e) => self.record_error("create tag", e),
        }
    }

    pub async fn update_tag_details(
        &mut self,
        column_id: i64,
        task_id: i64,
        tag_id: i64,
        updated_tag: &TagUpdate,
    ) {
        let project_id = match self.project_id() {
            Ok(id) => id,
            Err(e) => return self.record_error("update tag", e),
        };
        match services::tag::update_tag(&self.api, project_id, column_id, task_id, tag_id, updated_tag)
            .await
        {
            Ok(response) => {
                if let Some(task) = self.find_task(column_id, task_id) {
                    if let Some(tag) = task.tags.iter_mut().find(|t| t.id == tag_id) {
                        *tag = response;
                    }
                }
            }
            Err(e) => self.record_error("update tag", e),
        }
    }

    pub async fn remove_tag(&mut self, column_id: i64, task_id: i64, tag_id: i64) {
        let project_id = match self.project_id() {
            Ok(id) => id,
            Err(e) => return self.record_error("delete tag", e),
        };
        match services::tag::delete_tag(&self.api, project_id, column_id, task_id, tag_id).await {
            Ok(()) => {
                if let Some(task) = self.find_task(column_id, task_id) {
                    if let Some(pos) = task.tags.iter().position(|t| t.id == tag_id) {
                        task.tags.remove(pos);
                    }
                }
            }
            Err(e) => self.record_error("delete tag", e),
        }
    }
}
