mod cli;
mod context;
mod handlers;
mod host;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;
use tracing_subscriber::EnvFilter;

fn init_tracing() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TASKBOARD_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_env_filter(EnvFilter::new("debug"))
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .init();
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let cli = Cli::parse();

    if let Commands::Completions { shell } = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "taskboard", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = CliContext::from_cli(&cli)?;

    match cli.command {
        Commands::Login { email, password } => {
            handlers::session::handle_login(&ctx, &email, &password).await?;
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            handlers::session::handle_register(&ctx, name, email, password).await?;
        }
        Commands::ForgotPassword { email } => {
            handlers::session::handle_forgot_password(&ctx, &email).await?;
        }
        Commands::Logout => {
            handlers::session::handle_logout(&ctx).await?;
        }
        Commands::Boards(boards_cmd) => {
            handlers::boards::handle(&ctx, boards_cmd.action).await?;
        }
        Commands::Board(board_cmd) => {
            handlers::board::handle(&ctx, board_cmd.action).await?;
        }
        Commands::Task(task_cmd) => {
            handlers::task::handle(&ctx, task_cmd.action).await?;
        }
        Commands::Account(account_cmd) => {
            handlers::account::handle(&ctx, account_cmd.action).await?;
        }
        Commands::Completions { .. } => {}
    }

    Ok(())
}
