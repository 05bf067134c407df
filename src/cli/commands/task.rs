use clap::Subcommand;
use serde_json::json;

use crate::cli::{api_with_session, utils, OutputFormat};
use crate::services;
use crate::types::{Priority, TaskRequest, TaskStatus, TaskUpdate};

#[derive(Subcommand)]
pub enum TaskCommands {
    #[command(about = "Create a task in a column")]
    Create {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column id")]
        column_id: i64,
        #[arg(help = "Task title")]
        title: String,
        #[arg(long, help = "Due date (YYYY-MM-DD)")]
        due_date: String,
        #[arg(long, help = "Detail text")]
        detail: Option<String>,
        #[arg(long, default_value = "MEDIUM", help = "Priority: LOW, MEDIUM or HIGH")]
        priority: String,
        #[arg(
            long,
            default_value = "NOT_STARTED",
            help = "Status: NOT_STARTED, IN_PROGRESS or COMPLETED"
        )]
        status: String,
    },

    #[command(about = "Fetch a task")]
    Get {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column id")]
        column_id: i64,
        #[arg(help = "Task id")]
        task_id: i64,
    },

    #[command(about = "Update task fields")]
    Update {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column id")]
        column_id: i64,
        #[arg(help = "Task id")]
        task_id: i64,
        #[arg(long, help = "New title")]
        title: Option<String>,
        #[arg(long, help = "New due date (YYYY-MM-DD)")]
        due_date: Option<String>,
        #[arg(long, help = "New detail text")]
        detail: Option<String>,
        #[arg(long, help = "New priority: LOW, MEDIUM or HIGH")]
        priority: Option<String>,
        #[arg(long, help = "New status: NOT_STARTED, IN_PROGRESS or COMPLETED")]
        status: Option<String>,
    },

    #[command(about = "Delete a task")]
    Delete {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column id")]
        column_id: i64,
        #[arg(help = "Task id")]
        task_id: i64,
    },
}

pub async fn handle(cmd: TaskCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let (api, _storage) = api_with_session()?;

    match cmd {
        TaskCommands::Create {
            project_id,
            column_id,
            title,
            due_date,
            detail,
            priority,
            status,
        } => {
            let request = TaskRequest {
                title,
                detail,
                priority: utils::parse_wire_enum::<Priority>("priority", &priority)?,
                task_status: utils::parse_wire_enum::<TaskStatus>("status", &status)?,
                due_date,
                board_column_id: column_id,
            };
            let task = services::task::create_task(&api, project_id, column_id, &request)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                &format!("Tâche '{}' créée", task.title),
                Some(json!({ "id": task.id })),
            )
        }
        TaskCommands::Get {
            project_id,
            column_id,
            task_id,
        } => {
            let task = services::task::get_task_by_id(&api, project_id, column_id, task_id)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            let tags = task
                .tags
                .iter()
                .map(|t| t.designation.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            let text = format!(
                "#{} {} - priorité {} - {} - échéance {}{}",
                task.id,
                task.title,
                task.priority.label_fr(),
                task.task_status.label_fr(),
                task.due_date,
                if tags.is_empty() {
                    String::new()
                } else {
                    format!(" - tags: {}", tags)
                }
            );
            utils::output_resource(&output_format, &task, text)
        }
        TaskCommands::Update {
            project_id,
            column_id,
            task_id,
            title,
            due_date,
            detail,
            priority,
            status,
        } => {
            let update = TaskUpdate {
                title,
                detail,
                priority: priority
                    .map(|p| utils::parse_wire_enum::<Priority>("priority", &p))
                    .transpose()?,
                task_status: status
                    .map(|s| utils::parse_wire_enum::<TaskStatus>("status", &s))
                    .transpose()?,
                due_date,
            };
            let task = services::task::update_task(&api, project_id, column_id, task_id, &update)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                &format!("Tâche '{}' mise à jour", task.title),
                Some(json!({ "id": task.id })),
            )
        }
        TaskCommands::Delete {
            project_id,
            column_id,
            task_id,
        } => {
            services::task::delete_task(&api, project_id, column_id, task_id)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                "Tâche supprimée",
                Some(json!({ "id": task_id })),
            )
        }
    }
}
