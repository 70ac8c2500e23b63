//! Resolution and validation of `workflow run` options.

use crate::domain::{AppError, INPUT_ARGS_SEPARATOR, RunFlags, RunOptions};
use crate::ports::InputDescriptor;

/// Build validated [`RunOptions`] from positional arguments, flags and stdin.
///
/// Checks run in a fixed order and the first failure wins:
///
/// 1. a missing selector requires an interactive session;
/// 2. JSON may come from `--json` or stdin, not both;
/// 3. JSON and pass-through input arguments are mutually exclusive.
///
/// Stdin is read at most once, and only when it is not a terminal.
pub fn resolve_run_options(
    positional: &[String],
    flags: RunFlags,
    input: &dyn InputDescriptor,
) -> Result<RunOptions, AppError> {
    let (leading, input_args) = split_input_args(positional);
    let selector = leading.first().cloned();

    let prompt = selector.is_none();
    if prompt && !input.can_prompt() {
        return Err(AppError::MissingSelector);
    }

    let flag_json = flags.json.unwrap_or_default();
    let stdin_json = if input.is_stdin_terminal() {
        String::new()
    } else {
        let content = input.read_stdin()?;
        if content.trim().is_empty() { String::new() } else { content }
    };

    if !flag_json.is_empty() && !stdin_json.is_empty() {
        return Err(AppError::ConflictingJsonSources);
    }
    let json = if flag_json.is_empty() { stdin_json } else { flag_json };

    if !json.is_empty() && !input_args.is_empty() {
        return Err(AppError::ConflictingInputSources);
    }

    Ok(RunOptions {
        selector,
        git_ref: flags.git_ref,
        json,
        input_args: input_args.to_vec(),
        prompt,
    })
}

/// Split at the first `--`; everything after it is passed through verbatim.
fn split_input_args(positional: &[String]) -> (&[String], &[String]) {
    match positional.iter().position(|arg| arg == INPUT_ARGS_SEPARATOR) {
        Some(index) => (&positional[..index], &positional[index + 1..]),
        None => (positional, &[] as &[String]),
    }
}
