use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "td", about = concat!("taskdeck v", env!("CARGO_PKG_VERSION"), " - your lists live on the server"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to taskdeck.toml (defaults to ./taskdeck.toml)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Server URL, overriding the config file
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the tasks in a list
    Tasks(TasksArgs),
    /// Add a task to a list
    Add(AddArgs),
    /// Toggle a task's completion flag
    Toggle(TaskRefArgs),
    /// Delete a task (requires --yes)
    Rm(RmArgs),
    /// Replace a task's text
    Edit(EditArgs),
    /// Create a new list
    NewList(NewListArgs),
    /// Fetch a list and print it, verifying it can be switched to
    Switch(SwitchArgs),
}

#[derive(Args)]
pub struct TasksArgs {
    /// List id (defaults to initial_list_id from config)
    #[arg(long)]
    pub list: Option<i64>,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
    /// Due date, YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
    /// Priority label, e.g. "high"
    #[arg(long)]
    pub priority: Option<String>,
    /// List id (defaults to initial_list_id from config)
    #[arg(long)]
    pub list: Option<i64>,
}

#[derive(Args)]
pub struct TaskRefArgs {
    /// Task id
    pub id: i64,
    /// List id the task lives in (defaults to initial_list_id from config)
    #[arg(long)]
    pub list: Option<i64>,
}

#[derive(Args)]
pub struct RmArgs {
    /// Task id
    pub id: i64,
    /// List id the task lives in (defaults to initial_list_id from config)
    #[arg(long)]
    pub list: Option<i64>,
    /// Skip the confirmation prompt (required when not interactive)
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct EditArgs {
    /// Task id
    pub id: i64,
    /// New text
    pub text: String,
    /// List id the task lives in (defaults to initial_list_id from config)
    #[arg(long)]
    pub list: Option<i64>,
}

#[derive(Args)]
pub struct NewListArgs {
    /// List name
    pub name: String,
}

#[derive(Args)]
pub struct SwitchArgs {
    /// List id
    pub id: i64,
}
