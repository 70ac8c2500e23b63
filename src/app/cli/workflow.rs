//! Workflow command implementation.

use std::io::ErrorKind;

use clap::Subcommand;
use dialoguer::{Error as DialoguerError, Input};
use serde::Serialize;

use crate::app::output::write_json_output;
use crate::domain::{AppError, INPUT_ARGS_SEPARATOR, RunFlags, RunOptions};

const OUTPUT_SCHEMA_VERSION: u32 = 1;

#[derive(Subcommand)]
pub enum WorkflowCommands {
    /// Resolve and validate the options for running a workflow
    Run {
        /// Workflow ID, name, or filename (prompted for when omitted)
        selector: Option<String>,
        /// The branch or tag name which contains the version of the workflow file
        #[arg(long = "ref", value_name = "REF")]
        git_ref: Option<String>,
        /// Workflow inputs as a JSON object (alternatively piped on STDIN)
        #[arg(long)]
        json: Option<String>,
        /// Workflow inputs as flags, passed after `--`
        #[arg(last = true, value_name = "INPUTS")]
        input_args: Vec<String>,
    },
}

/// Output of `workflow run`.
#[derive(Debug, Serialize)]
pub struct WorkflowRunOutput {
    /// Schema version for output format stability.
    pub schema_version: u32,
    #[serde(flatten)]
    pub options: RunOptions,
}

pub fn run_workflow(command: WorkflowCommands) -> Result<(), AppError> {
    match command {
        WorkflowCommands::Run { selector, git_ref, json, input_args } => {
            let positional = positional_args(selector, input_args);
            let flags = RunFlags { git_ref, json };
            let mut options = crate::app::api::workflow_run_options(&positional, flags)?;

            if options.prompt {
                let Some(selector) = prompt_selector()? else {
                    return Ok(());
                };
                options.selector = Some(selector);
                options.prompt = false;
            }

            write_json_output(&WorkflowRunOutput { schema_version: OUTPUT_SCHEMA_VERSION, options })
        }
    }
}

/// Rebuild the raw positional list, with the separator clap consumed.
fn positional_args(selector: Option<String>, input_args: Vec<String>) -> Vec<String> {
    let mut positional: Vec<String> = selector.into_iter().collect();
    if !input_args.is_empty() {
        positional.push(INPUT_ARGS_SEPARATOR.to_string());
        positional.extend(input_args);
    }
    positional
}

fn prompt_selector() -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt("Workflow ID, name, or filename").interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Prompt(format!("Failed to read workflow selector: {}", err))),
    }
}
