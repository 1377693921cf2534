use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::debug;

use crate::client::TaskClient;
use crate::errors::DashboardError;
use crate::render::render_dashboard;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080";

#[derive(Parser, Debug)]
#[command(name = "dashboard", about = "Task dashboard for the CRUD services", version)]
pub struct Cli {
    /// Base URL of the task service
    #[arg(long, env = "TASKS_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show all tasks and statistics
    List,
    /// Add a new task
    Add { title: String },
    /// Mark a task as completed
    Done { id: i32 },
    /// Mark a task as pending again
    Undo { id: i32 },
    /// Change the title of a task
    Rename { id: i32, title: String },
    /// Delete a task
    Delete { id: i32 },
}

/// Run one dashboard command and return the text to print.
pub async fn execute(client: &TaskClient, command: Command) -> Result<String, DashboardError> {
    let notice = match command {
        Command::List => None,
        Command::Add { title } => {
            let task = client.add(&title).await?;
            Some(format!("Added task #{}", task.id))
        }
        Command::Done { id } => {
            let task = client.find(id).await?;
            client.update(id, &task.title, true).await?;
            Some(format!("Task #{id} completed"))
        }
        Command::Undo { id } => {
            let task = client.find(id).await?;
            client.update(id, &task.title, false).await?;
            Some(format!("Task #{id} marked pending"))
        }
        Command::Rename { id, title } => {
            let task = client.find(id).await?;
            client.update(id, &title, task.completed).await?;
            Some(format!("Task #{id} renamed"))
        }
        Command::Delete { id } => {
            client.delete(id).await?;
            Some(format!("Task #{id} deleted"))
        }
    };

    // always render from a fresh fetch
    let tasks = client.list().await?;
    debug!(count = tasks.len(), "fetched tasks");
    let mut out = String::new();
    if let Some(notice) = notice {
        out.push_str(&format!("{}\n\n", notice.green()));
    }
    out.push_str(&render_dashboard(&tasks));
    Ok(out)
}

pub async fn run(cli: Cli) -> Result<String, DashboardError> {
    let client = TaskClient::new(cli.api);
    execute(&client, cli.command.unwrap_or(Command::List)).await
}
