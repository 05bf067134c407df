use clap::Subcommand;
use serde_json::json;

use crate::cli::{api_with_session, utils, OutputFormat};
use crate::services;
use crate::types::{BoardColumnRequest, BoardColumnUpdate};

#[derive(Subcommand)]
pub enum ColumnCommands {
    #[command(about = "Create a column on a project board")]
    Create {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column name")]
        name: String,
    },

    #[command(about = "Fetch a column with its tasks")]
    Get {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column id")]
        column_id: i64,
    },

    #[command(about = "Rename a column")]
    Rename {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column id")]
        column_id: i64,
        #[arg(help = "New name")]
        name: String,
    },

    #[command(about = "Delete a column")]
    Delete {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column id")]
        column_id: i64,
    },
}

pub async fn handle(cmd: ColumnCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let (api, _storage) = api_with_session()?;

    match cmd {
        ColumnCommands::Create { project_id, name } => {
            let request = BoardColumnRequest { name, project_id };
            let column = services::board_column::create_column(&api, project_id, &request)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                &format!("Colonne '{}' créée", column.name),
                Some(json!({ "id": column.id })),
            )
        }
        ColumnCommands::Get {
            project_id,
            column_id,
        } => {
            let column = services::board_column::get_column_by_id(&api, project_id, column_id)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            let text = format!(
                "[{}] {} ({} tâches)",
                column.id,
                column.name,
                column.tasks.len()
            );
            utils::output_resource(&output_format, &column, text)
        }
        ColumnCommands::Rename {
            project_id,
            column_id,
            name,
        } => {
            let update = BoardColumnUpdate { name: Some(name) };
            let column = services::board_column::update_column(&api, project_id, column_id, &update)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                &format!("Colonne renommée en '{}'", column.name),
                Some(json!({ "id": column.id })),
            )
        }
        ColumnCommands::Delete {
            project_id,
            column_id,
        } => {
            let project = services::board_column::delete_column(&api, project_id, column_id)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                "Colonne supprimée",
                Some(json!({ "projectId": project.id, "remainingColumns": project.columns.len() })),
            )
        }
    }
}
