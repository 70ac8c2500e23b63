//! Input descriptor over the process's standard streams.

use std::io::{IsTerminal, Read};

use crate::domain::AppError;
use crate::ports::InputDescriptor;

/// The real stdin/stdout of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdioInput;

impl InputDescriptor for StdioInput {
    fn is_stdin_terminal(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    fn is_stdout_terminal(&self) -> bool {
        std::io::stdout().is_terminal()
    }

    fn read_stdin(&self) -> Result<String, AppError> {
        let mut content = String::new();
        std::io::stdin().lock().read_to_string(&mut content).map_err(AppError::StdinReadFailed)?;
        Ok(content)
    }
}
