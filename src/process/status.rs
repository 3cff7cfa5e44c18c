//! Exit status of a builtin or foreground child.

use nix::sys::signal::Signal;
use std::fmt;
use std::os::unix::process::ExitStatusExt;
use std::process;

/// Result of running a command.
///
/// Abnormal termination is its own variant so it can never be mistaken for
/// an ordinary exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Normal completion with the given code.
    Code(i32),
    /// The child was terminated by a signal.
    Abnormal { signal: i32, core_dumped: bool },
}

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus::Code(0);

    pub fn is_success(&self) -> bool {
        *self == ExitStatus::SUCCESS
    }

    pub fn is_abnormal(&self) -> bool {
        matches!(self, ExitStatus::Abnormal { .. })
    }
}

impl Default for ExitStatus {
    fn default() -> Self {
        ExitStatus::SUCCESS
    }
}

impl From<process::ExitStatus> for ExitStatus {
    fn from(status: process::ExitStatus) -> Self {
        match status.code() {
            Some(code) => ExitStatus::Code(code),
            None => ExitStatus::Abnormal {
                signal: status.signal().unwrap_or(0),
                core_dumped: status.core_dumped(),
            },
        }
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Code(code) => write!(f, "exit code {code}"),
            ExitStatus::Abnormal {
                signal,
                core_dumped,
            } => {
                match Signal::try_from(*signal) {
                    Ok(sig) => write!(f, "terminated by signal {}", sig.as_str())?,
                    Err(_) => write!(f, "terminated by signal {signal}")?,
                }
                if *core_dumped {
                    write!(f, " (core dumped)")?;
                }
                Ok(())
            }
        }
    }
}
