pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::storage::{SessionStorage, TOKEN_KEY};

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "Kanban CLI - Command-line client for the project-management API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Authentication and session management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Project operations")]
    Project {
        #[command(subcommand)]
        cmd: commands::project::ProjectCommands,
    },

    #[command(about = "Board column operations")]
    Column {
        #[command(subcommand)]
        cmd: commands::column::ColumnCommands,
    },

    #[command(about = "Task operations")]
    Task {
        #[command(subcommand)]
        cmd: commands::task::TaskCommands,
    },

    #[command(about = "Tag operations")]
    Tag {
        #[command(subcommand)]
        cmd: commands::tag::TagCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Client plus session storage, with any persisted token already attached.
pub(crate) fn api_with_session() -> anyhow::Result<(ApiClient, SessionStorage)> {
    let storage = SessionStorage::from_config()?;
    let mut api = ApiClient::from_config()?;
    if let Some(token) = storage.get(TOKEN_KEY)? {
        api.set_token(Some(token));
    }
    Ok((api, storage))
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, output_format).await,
        Commands::Project { cmd } => commands::project::handle(cmd, output_format).await,
        Commands::Column { cmd } => commands::column::handle(cmd, output_format).await,
        Commands::Task { cmd } => commands::task::handle(cmd, output_format).await,
        Commands::Tag { cmd } => commands::tag::handle(cmd, output_format).await,
    }
}
