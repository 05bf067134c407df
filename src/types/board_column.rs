use serde::{Deserialize, Serialize};

use super::task::TaskResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumnRequest {
    pub name: String,
    pub project_id: i64,
}

/// Partial update; only set fields travel on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumnUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardColumnResponse {
    pub id: i64,
    pub name: String,
    pub project_id: i64,
    #[serde(default)]
    pub tasks: Vec<TaskResponse>,
}
