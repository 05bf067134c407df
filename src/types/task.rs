use serde::{Deserialize, Serialize};

use super::tag::TagResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub priority: Priority,
    pub task_status: TaskStatus,
    pub due_date: String,
    pub board_column_id: i64,
}

/// Partial update; only set fields travel on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub detail: Option<String>,
    pub priority: Priority,
    pub task_status: TaskStatus,
    pub due_date: String,
    pub board_column_id: i64,
    #[serde(default)]
    pub tags: Vec<TagResponse>,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// French display label, as shown in the board UI.
    pub fn label_fr(&self) -> &'static str {
        match self {
            Priority::Low => "faible",
            Priority::Medium => "moyenne",
            Priority::High => "élevée",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// French display label, as shown in the board UI.
    pub fn label_fr(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "non commencé",
            TaskStatus::InProgress => "en cours",
            TaskStatus::Completed => "terminé",
        }
    }
}
