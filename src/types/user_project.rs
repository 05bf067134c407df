use serde::{Deserialize, Serialize};

/// Body for adding a member to a project. The project id travels in the
/// resource path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProjectRequest {
    pub user_email: String,
    pub role: Role,
}

/// Membership record linking a user to a project with a role.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProjectResponse {
    pub id: i64,
    pub project_id: i64,
    pub project_name: String,
    #[serde(default)]
    pub project_description: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub user_added_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    /// French display label.
    pub fn label_fr(&self) -> &'static str {
        match self {
            Role::Admin => "Administrateur",
            Role::Member => "Membre",
        }
    }
}
