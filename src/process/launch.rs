//! Foreground child execution.

use crate::cmd::CommandLine;
use crate::error::ExecError;
use crate::process::ExitStatus;
use crate::signal::{ForegroundGuard, SignalDisposition};
use std::io;
use std::os::unix::process::CommandExt;
use std::process::Command;

/// Runs commands that are not builtins.
pub trait Launcher {
    /// Run the command to completion and report how it ended.
    fn launch(&mut self, command: &CommandLine) -> ExitStatus;
}

/// Launches commands as foreground children of the shell, one at a time.
#[derive(Debug, Default)]
pub struct ForegroundLauncher;

impl ForegroundLauncher {
    pub fn new() -> Self {
        ForegroundLauncher
    }
}

impl Launcher for ForegroundLauncher {
    fn launch(&mut self, command: &CommandLine) -> ExitStatus {
        run_foreground(command)
    }
}

/// Spawn `command` with the terminal's interrupts routed to it and wait for it.
pub fn run_foreground(command: &CommandLine) -> ExitStatus {
    let program = command.program();

    let guard = match ForegroundGuard::enter() {
        Ok(guard) => guard,
        Err(errno) => {
            eprintln!("mar1bash: unable to suspend interrupts: {errno}");
            return ExitStatus::Code(errno as i32);
        }
    };

    let mut cmd = Command::new(program);
    cmd.args(command.args());
    // SAFETY: sigaction is async-signal-safe; nothing else runs in the child.
    unsafe {
        cmd.pre_exec(|| SignalDisposition::Default.apply().map_err(io::Error::from));
    }

    let mut child = match cmd.spawn() {
        Ok(child) => child,
        Err(err) => {
            let err = ExecError::spawn(program, err);
            eprintln!("mar1bash: {err}");
            return ExitStatus::Code(err.code());
        }
    };
    tracing::debug!("spawned {program} as pid {}", child.id());

    let waited = child.wait();
    drop(guard);

    let status = match waited {
        Ok(status) => ExitStatus::from(status),
        Err(source) => {
            let err = ExecError::Wait {
                program: program.to_string(),
                source,
            };
            eprintln!("mar1bash: {err}");
            return ExitStatus::Code(err.code());
        }
    };

    tracing::debug!("{program} finished: {status}");
    if status.is_abnormal() {
        eprintln!("mar1bash: {program}: {status}");
    }
    status
}
