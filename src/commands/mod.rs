pub mod add;
pub mod delete;
pub mod list;
pub mod migrations;
pub mod serve;
pub mod toggle;

use crate::api::HttpTaskApi;
use crate::libs::board::TaskBoard;
use crate::libs::config::Config;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Run the API server and serve the client bundle")]
    Serve(serve::ServeArgs),
    #[command(about = "Show all tasks")]
    List,
    #[command(about = "Add a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Mark a task as done, or as pending again", arg_required_else_help = true)]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Inspect database migrations", arg_required_else_help = true)]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    /// Server base URL for client commands (overrides TASKBOARD_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        let mut config = Config::from_env()?;
        if let Some(api_url) = cli.api_url {
            config.api_url = api_url;
        }

        match cli.command {
            Commands::Serve(args) => serve::cmd(args, config).await,
            Commands::List => list::cmd(&config).await,
            Commands::Add(args) => add::cmd(args, &config).await,
            Commands::Toggle(args) => toggle::cmd(args, &config).await,
            Commands::Delete(args) => delete::cmd(args, &config).await,
            Commands::Migrations(args) => migrations::cmd(args, &config),
        }
    }
}

/// Connects to the configured server and fetches the current board.
async fn load_board(config: &Config) -> Result<(HttpTaskApi, TaskBoard)> {
    let api = HttpTaskApi::new(&config.api_url);
    let mut board = TaskBoard::new();
    board.load(&api).await?;

    Ok((api, board))
}
