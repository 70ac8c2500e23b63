//! CLI Adapter.

mod repo;
mod workflow;

use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ghctx")]
#[command(version)]
#[command(
    about = "Resolve repository references and workflow run options for GitHub",
    long_about = None
)]
struct Cli {
    /// Log diagnostics to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Work with repository references
    Repo {
        #[command(subcommand)]
        command: repo::RepoCommands,
    },
    /// Work with GitHub Actions workflows
    #[clap(visible_alias = "wf")]
    Workflow {
        #[command(subcommand)]
        command: workflow::WorkflowCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    super::logging::init(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Repo { command } => repo::run_repo(command),
        Commands::Workflow { command } => workflow::run_workflow(command),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "Command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
