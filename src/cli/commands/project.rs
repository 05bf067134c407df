use clap::Subcommand;
use serde_json::json;

use crate::cli::{api_with_session, utils, OutputFormat};
use crate::services;
use crate::types::{ProjectRequest, ProjectResponse, Role, UserProjectRequest};

#[derive(Subcommand)]
pub enum ProjectCommands {
    #[command(about = "Create a project")]
    Create {
        #[arg(help = "Project name")]
        name: String,
        #[arg(long, help = "Description")]
        description: Option<String>,
        #[arg(long, help = "Start date (YYYY-MM-DD)")]
        start_date: String,
        #[arg(long, help = "End date (YYYY-MM-DD)")]
        end_date: String,
        #[arg(long, help = "Id of the creating user")]
        created_by: i64,
    },

    #[command(about = "Fetch a project with its board")]
    Get {
        #[arg(help = "Project id")]
        id: i64,
    },

    #[command(about = "Update a project")]
    Update {
        #[arg(help = "Project id")]
        id: i64,
        #[arg(help = "Project name")]
        name: String,
        #[arg(long, help = "Description")]
        description: Option<String>,
        #[arg(long, help = "Start date (YYYY-MM-DD)")]
        start_date: String,
        #[arg(long, help = "End date (YYYY-MM-DD)")]
        end_date: String,
        #[arg(long, help = "Id of the creating user")]
        created_by: i64,
    },

    #[command(about = "Delete a project")]
    Delete {
        #[arg(help = "Project id")]
        id: i64,
    },

    #[command(about = "Add a user to a project")]
    Adduser {
        #[arg(help = "Project id")]
        id: i64,
        #[arg(help = "Email of the user to add")]
        user_email: String,
        #[arg(long, default_value = "MEMBER", help = "Role: ADMIN or MEMBER")]
        role: String,
    },
}

fn project_summary(project: &ProjectResponse) -> String {
    let mut lines = vec![format!(
        "#{} {} ({} -> {})",
        project.id, project.name, project.start_date, project.end_date
    )];
    for column in &project.columns {
        lines.push(format!("  [{}] {} ({} tâches)", column.id, column.name, column.tasks.len()));
        for task in &column.tasks {
            lines.push(format!(
                "    #{} {} - {} / {}",
                task.id,
                task.title,
                task.priority.label_fr(),
                task.task_status.label_fr()
            ));
        }
    }
    lines.join("\n")
}

pub async fn handle(cmd: ProjectCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let (api, _storage) = api_with_session()?;

    match cmd {
        ProjectCommands::Create {
            name,
            description,
            start_date,
            end_date,
            created_by,
        } => {
            let request = ProjectRequest {
                name,
                description,
                start_date,
                end_date,
                created_by,
            };
            let project = services::project::create_project(&api, &request)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                &format!("Projet '{}' créé", project.name),
                Some(json!({ "id": project.id })),
            )
        }
        ProjectCommands::Get { id } => {
            let project = services::project::get_project_by_id(&api, id)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_resource(&output_format, &project, project_summary(&project))
        }
        ProjectCommands::Update {
            id,
            name,
            description,
            start_date,
            end_date,
            created_by,
        } => {
            let request = ProjectRequest {
                name,
                description,
                start_date,
                end_date,
                created_by,
            };
            let project = services::project::update_project(&api, id, &request)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                &format!("Projet '{}' mis à jour", project.name),
                Some(json!({ "id": project.id })),
            )
        }
        ProjectCommands::Delete { id } => {
            services::project::delete_project(&api, id)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(&output_format, "Projet supprimé", Some(json!({ "id": id })))
        }
        ProjectCommands::Adduser {
            id,
            user_email,
            role,
        } => {
            let role: Role = utils::parse_wire_enum("role", &role)?;
            let membership = UserProjectRequest { user_email, role };
            services::project::add_user_to_project(&api, id, &membership)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                &format!("Utilisateur ajouté ({})", role.label_fr()),
                Some(json!({ "projectId": id })),
            )
        }
    }
}
