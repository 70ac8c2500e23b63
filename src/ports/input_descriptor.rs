//! Standard stream port definition.

use crate::domain::AppError;

/// Describes the session's standard streams.
pub trait InputDescriptor {
    fn is_stdin_terminal(&self) -> bool;

    fn is_stdout_terminal(&self) -> bool;

    /// Interactive prompts need both ends attached to a terminal.
    fn can_prompt(&self) -> bool {
        self.is_stdin_terminal() && self.is_stdout_terminal()
    }

    /// Read all of standard input. Consumes the stream; call at most once.
    fn read_stdin(&self) -> Result<String, AppError>;
}
