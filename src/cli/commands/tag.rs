use clap::Subcommand;
use serde_json::json;

use crate::cli::{api_with_session, utils, OutputFormat};
use crate::services;
use crate::types::{TagRequest, TagUpdate};

#[derive(Subcommand)]
pub enum TagCommands {
    #[command(about = "Attach a tag to a task")]
    Create {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column id")]
        column_id: i64,
        #[arg(help = "Task id")]
        task_id: i64,
        #[arg(help = "Tag designation")]
        designation: String,
        #[arg(long, help = "Hex color, e.g. #ff8800")]
        color: Option<String>,
    },

    #[command(about = "Fetch a tag")]
    Get {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column id")]
        column_id: i64,
        #[arg(help = "Task id")]
        task_id: i64,
        #[arg(help = "Tag id")]
        tag_id: i64,
    },

    #[command(about = "Update a tag")]
    Update {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column id")]
        column_id: i64,
        #[arg(help = "Task id")]
        task_id: i64,
        #[arg(help = "Tag id")]
        tag_id: i64,
        #[arg(long, help = "New designation")]
        designation: Option<String>,
        #[arg(long, help = "New hex color")]
        color: Option<String>,
    },

    #[command(about = "Delete a tag")]
    Delete {
        #[arg(help = "Project id")]
        project_id: i64,
        #[arg(help = "Column id")]
        column_id: i64,
        #[arg(help = "Task id")]
        task_id: i64,
        #[arg(help = "Tag id")]
        tag_id: i64,
    },
}

pub async fn handle(cmd: TagCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let (api, _storage) = api_with_session()?;

    match cmd {
        TagCommands::Create {
            project_id,
            column_id,
            task_id,
            designation,
            color,
        } => {
            let request = TagRequest { designation, color };
            let tag = services::tag::create_tag(&api, project_id, column_id, task_id, &request)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                &format!("Tag '{}' créé", tag.designation),
                Some(json!({ "id": tag.id })),
            )
        }
        TagCommands::Get {
            project_id,
            column_id,
            task_id,
            tag_id,
        } => {
            let tag = services::tag::get_tag_by_id(&api, project_id, column_id, task_id, tag_id)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            let text = format!(
                "#{} {}{}",
                tag.id,
                tag.designation,
                tag.color
                    .as_deref()
                    .map(|c| format!(" ({})", c))
                    .unwrap_or_default()
            );
            utils::output_resource(&output_format, &tag, text)
        }
        TagCommands::Update {
            project_id,
            column_id,
            task_id,
            tag_id,
            designation,
            color,
        } => {
            let update = TagUpdate { designation, color };
            let tag =
                services::tag::update_tag(&api, project_id, column_id, task_id, tag_id, &update)
                    .await
                    .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                &format!("Tag '{}' mis à jour", tag.designation),
                Some(json!({ "id": tag.id })),
            )
        }
        TagCommands::Delete {
            project_id,
            column_id,
            task_id,
            tag_id,
        } => {
            services::tag::delete_tag(&api, project_id, column_id, task_id, tag_id)
                .await
                .unwrap_or_else(|e| utils::fail(&output_format, &e));
            utils::output_success(
                &output_format,
                "Tag supprimé",
                Some(json!({ "id": tag_id })),
            )
        }
    }
}
