//! Repo command implementation.

use clap::Subcommand;

use crate::app::output::write_json_output;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum RepoCommands {
    /// Resolve a [HOST/]OWNER/REPO short-hand into a full reference
    Resolve {
        /// Repository in [HOST/]OWNER/REPO form; a bare REPO uses your own account
        repo: String,
        /// Do not query the API for a missing owner
        #[arg(long)]
        offline: bool,
        /// Print host, owner and name as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run_repo(command: RepoCommands) -> Result<(), AppError> {
    match command {
        RepoCommands::Resolve { repo, offline, json } => {
            let reference = crate::app::api::resolve_repository(&repo, !offline)?;
            if json {
                write_json_output(&reference)
            } else {
                println!("{}", reference);
                Ok(())
            }
        }
    }
}
