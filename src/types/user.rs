use serde::{Deserialize, Serialize};

use super::project::CreatedProject;
use super::user_project::UserProjectResponse;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub position: Position,
    #[serde(default)]
    pub created_date: Option<String>,
    #[serde(default)]
    pub updated_date: Option<String>,
    #[serde(default)]
    pub created_projects: Vec<CreatedProject>,
    #[serde(default)]
    pub user_projects: Vec<UserProjectResponse>,
}

/// Positions offered at registration. Wire values are the French display
/// labels, as the backend stores them verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Développeur")]
    Developer,
    #[serde(rename = "Chef de projet")]
    ProjectManager,
    #[serde(rename = "Designer")]
    Designer,
    #[serde(rename = "Testeur")]
    Tester,
    #[serde(rename = "DevOps")]
    DevOps,
    #[serde(rename = "Analyste métier")]
    BusinessAnalyst,
    #[serde(rename = "Architecte")]
    Architect,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Product Owner")]
    ProductOwner,
    #[serde(rename = "Scrum Master")]
    ScrumMaster,
    #[serde(rename = "Lead Technique")]
    TechnicalLead,
    #[serde(rename = "CEO")]
    Ceo,
    #[serde(rename = "CTO")]
    Cto,
    #[serde(rename = "CFO")]
    Cfo,
    #[serde(rename = "Responsable RH")]
    HrManager,
    #[serde(rename = "Responsable Communication")]
    CommunicationsManager,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Developer => "Développeur",
            Position::ProjectManager => "Chef de projet",
            Position::Designer => "Designer",
            Position::Tester => "Testeur",
            Position::DevOps => "DevOps",
            Position::BusinessAnalyst => "Analyste métier",
            Position::Architect => "Architecte",
            Position::Marketing => "Marketing",
            Position::ProductOwner => "Product Owner",
            Position::ScrumMaster => "Scrum Master",
            Position::TechnicalLead => "Lead Technique",
            Position::Ceo => "CEO",
            Position::Cto => "CTO",
            Position::Cfo => "CFO",
            Position::HrManager => "Responsable RH",
            Position::CommunicationsManager => "Responsable Communication",
        }
    }
}
