use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::InputDescriptor;

/// Scripted standard streams.
///
/// Mirrors how a terminal session behaves: when stdin carries content it is
/// a pipe, never a terminal.
pub struct FakeInput {
    stdin_tty: bool,
    stdout_tty: bool,
    stdin: String,
    fail_read: bool,
    pub reads: Mutex<usize>,
}

impl FakeInput {
    /// Both streams attached to a terminal, nothing piped.
    pub fn tty() -> Self {
        Self::new(true, true, "")
    }

    /// Neither stream is a terminal and stdin is empty.
    pub fn non_tty() -> Self {
        Self::new(false, false, "")
    }

    /// Stdin piped with `content`; stdout terminal state as given.
    pub fn piped(content: &str, stdout_tty: bool) -> Self {
        Self::new(false, stdout_tty, content)
    }

    /// Stdin is a pipe that errors when read.
    pub fn broken_pipe() -> Self {
        let mut input = Self::new(false, false, "");
        input.fail_read = true;
        input
    }

    fn new(stdin_tty: bool, stdout_tty: bool, stdin: &str) -> Self {
        Self {
            stdin_tty,
            stdout_tty,
            stdin: stdin.to_string(),
            fail_read: false,
            reads: Mutex::new(0),
        }
    }

    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

impl InputDescriptor for FakeInput {
    fn is_stdin_terminal(&self) -> bool {
        self.stdin_tty
    }

    fn is_stdout_terminal(&self) -> bool {
        self.stdout_tty
    }

    fn read_stdin(&self) -> Result<String, AppError> {
        let mut reads = self.reads.lock().unwrap();
        *reads += 1;
        if self.fail_read {
            return Err(AppError::StdinReadFailed(std::io::Error::other("broken pipe")));
        }
        if *reads > 1 {
            return Ok(String::new());
        }
        Ok(self.stdin.clone())
    }
}
