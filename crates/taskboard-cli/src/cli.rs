use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taskboard_domain::TaskStatus;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_COMMIT_HASH"),
    ")"
);

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(about = "Terminal client for a kanban task board service", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Backend base URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL", env = "TASKBOARD_SERVER")]
    pub server: Option<String>,

    /// File holding the session token (overrides the config file)
    #[arg(long, global = true, value_name = "PATH", env = "TASKBOARD_CREDENTIAL_FILE")]
    pub credential_file: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Request a temporary password by email
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// End the session and forget the token
    Logout,
    /// The board list
    Boards(BoardsCommand),
    /// A single board
    Board(BoardCommand),
    /// A single task
    Task(TaskCommand),
    /// Profile settings
    Account(AccountCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct BoardsCommand {
    #[command(subcommand)]
    pub action: BoardsAction,
}

#[derive(Subcommand)]
pub enum BoardsAction {
    /// List your boards
    List,
    /// Create a board
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
}

#[derive(Args)]
pub struct BoardCommand {
    #[command(subcommand)]
    pub action: BoardAction,
}

#[derive(Subcommand)]
pub enum BoardAction {
    /// Show a board and its tasks by status
    Show {
        #[arg(long)]
        id: i32,
    },
    /// Change a board's title or description
    Update(BoardUpdateArgs),
    /// Delete a board and its tasks
    Delete {
        #[arg(long)]
        id: i32,
    },
    /// Add a task to a board
    AddTask {
        #[arg(long)]
        id: i32,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
}

#[derive(Args)]
pub struct BoardUpdateArgs {
    #[arg(long)]
    pub id: i32,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Show a task
    Show(TaskRef),
    /// Edit a task's fields or status
    Save(TaskSaveArgs),
    /// Delete a task
    Delete(TaskRef),
}

#[derive(Args)]
pub struct TaskRef {
    #[arg(long)]
    pub board_id: i32,
    #[arg(long)]
    pub id: i32,
}

#[derive(Args)]
pub struct TaskSaveArgs {
    #[command(flatten)]
    pub task: TaskRef,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Todo,
    InProgress,
    Done,
    OnHold,
}

impl From<StatusArg> for TaskStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Todo => TaskStatus::ToDo,
            StatusArg::InProgress => TaskStatus::InProgress,
            StatusArg::Done => TaskStatus::Done,
            StatusArg::OnHold => TaskStatus::OnHold,
        }
    }
}

#[derive(Args)]
pub struct AccountCommand {
    #[command(subcommand)]
    pub action: AccountAction,
}

#[derive(Subcommand)]
pub enum AccountAction {
    /// Show name and email
    Show,
    /// Change your display name
    Rename {
        #[arg(long)]
        name: String,
    },
    /// Change your email address
    Email {
        #[arg(long)]
        email: String,
    },
    /// Change your password; signs you out on success
    Password {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        repeat: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_task_save() {
        let cli = Cli::try_parse_from([
            "taskboard", "task", "save", "--board-id", "7", "--id", "3", "--status", "on-hold",
        ])
        .unwrap();
        match cli.command {
            Commands::Task(TaskCommand {
                action: TaskAction::Save(args),
            }) => {
                assert_eq!(args.task.board_id, 7);
                assert_eq!(args.task.id, 3);
                assert_eq!(args.status.map(TaskStatus::from), Some(TaskStatus::OnHold));
                assert!(args.title.is_none());
            }
            _ => panic!("expected task save"),
        }
    }
}
