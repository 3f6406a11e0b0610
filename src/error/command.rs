//! External command errors

use super::PinError;

/// Creates a command failed error from the rendered command line and exit status.
///
/// A missing status means the child was killed by a signal.
pub fn failed(command: impl Into<String>, code: Option<i32>) -> PinError {
    match code {
        Some(code) => PinError::CommandFailed {
            command: command.into(),
            code,
        },
        None => PinError::CommandTerminated {
            command: command.into(),
        },
    }
}

/// Creates a spawn failed error
pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> PinError {
    PinError::CommandSpawnFailed {
        program: program.into(),
        reason: reason.into(),
    }
}
