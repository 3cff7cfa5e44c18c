//! Error types shared across the shell.

use nix::errno::Errno;
use rustyline::error::ReadlineError;
use std::io;
use thiserror::Error;

/// Failures that end the control loop.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("line editor failure: {0}")]
    Editor(#[from] ReadlineError),
    #[error("unable to change interrupt disposition: {0}")]
    Signal(#[from] Errno),
    #[error("shell I/O error: {0}")]
    Io(#[from] io::Error),
}

/// User input errors raised by the `cd` builtin.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CdError {
    #[error("cd: too many arguments")]
    TooManyArguments,
    #[error("cd: HOME directory not found: {0}")]
    HomeNotFound(String),
    #[error("cd: OLDPWD not set")]
    OldPwdNotSet,
    #[error("cd: no such file or directory: {0}")]
    NoSuchDirectory(String),
}

impl CdError {
    /// Status code stored in the shell after the failure.
    pub fn code(&self) -> i32 {
        match self {
            CdError::TooManyArguments => Errno::EINVAL as i32,
            CdError::HomeNotFound(_) | CdError::NoSuchDirectory(_) => Errno::ENOENT as i32,
            CdError::OldPwdNotSet => 1,
        }
    }
}

/// Failures creating or awaiting a foreground child.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("{program}: command not found")]
    NotFound { program: String },
    #[error("{program}: permission denied")]
    PermissionDenied { program: String },
    #[error("{program}: unable to spawn process: {source}")]
    Spawn { program: String, source: io::Error },
    #[error("{program}: unable to wait for process: {source}")]
    Wait { program: String, source: io::Error },
}

impl ExecError {
    /// Classify a spawn error by its kind.
    pub fn spawn(program: &str, source: io::Error) -> Self {
        let program = program.to_string();
        match source.kind() {
            io::ErrorKind::NotFound => ExecError::NotFound { program },
            io::ErrorKind::PermissionDenied => ExecError::PermissionDenied { program },
            _ => ExecError::Spawn { program, source },
        }
    }

    /// Status code stored in the shell after the failure.
    pub fn code(&self) -> i32 {
        match self {
            ExecError::NotFound { .. } => 127,
            ExecError::PermissionDenied { .. } => 126,
            ExecError::Spawn { source, .. } | ExecError::Wait { source, .. } => {
                source.raw_os_error().unwrap_or(1)
            }
        }
    }
}
