//! Options for `workflow run`.

use serde::Serialize;

/// Token separating the selector from pass-through workflow inputs.
pub const INPUT_ARGS_SEPARATOR: &str = "--";

/// Raw flag values for `workflow run`, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunFlags {
    /// `--ref` value.
    pub git_ref: Option<String>,
    /// `--json` value.
    pub json: Option<String>,
}

/// Validated options for dispatching a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunOptions {
    /// Workflow ID, name, or filename.
    pub selector: Option<String>,
    /// Git ref to run the workflow on.
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
    /// Raw JSON inputs payload; empty when none was given.
    pub json: String,
    /// Arguments following `--`, in order.
    pub input_args: Vec<String>,
    /// Selector must be chosen interactively.
    pub prompt: bool,
}
