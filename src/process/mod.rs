//! Builtin dispatch and external process execution.

pub mod builtin;
pub mod cd;
pub mod exit;
pub mod launch;
pub mod status;
pub mod welcome;

use crate::cmd::CommandLine;
use crate::process::builtin::map::BuiltinMap;
pub use launch::{ForegroundLauncher, Launcher};
pub use status::ExitStatus;

/// What the control loop should do after a command ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Store the status and prompt again.
    Continue(ExitStatus),
    /// Store the status and terminate the shell.
    Exit(ExitStatus),
}

impl Outcome {
    pub fn status(&self) -> ExitStatus {
        match self {
            Outcome::Continue(status) | Outcome::Exit(status) => *status,
        }
    }
}

/// Execute a command, dispatching to builtins or spawning external processes.
pub fn execute(
    builtin_map: &mut BuiltinMap,
    launcher: &mut dyn Launcher,
    command: &CommandLine,
) -> Outcome {
    // Determine if command is builtin, and call function
    if let Some(outcome) = builtin_map.invoke(command) {
        tracing::debug!("builtin {} -> {:?}", command.program(), outcome);
        return outcome;
    }

    tracing::debug!("launching external command: {command}");
    Outcome::Continue(launcher.launch(command))
}
