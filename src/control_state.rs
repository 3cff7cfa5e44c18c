//! State machine backing the interactive control loop.

use crate::cmd::tokenize;
use crate::conf::home_dir;
use crate::process::builtin::map::BuiltinMap;
use crate::process::{self, ExitStatus, ForegroundLauncher, Launcher, Outcome};
use crossterm::style::Stylize;
use std::env;
use std::path::Path;

/// Signals whether the control loop should continue or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    /// A command ran; keep reading user input.
    CONTINUE,
    /// The line held no command; print a separator and prompt again.
    EMPTY,
    /// Terminate the control loop.
    EXIT,
}

/// Shared state that backs the interactive control loop.
pub struct ControlState {
    status: ExitStatus,
    builtin_map: BuiltinMap,
    launcher: Box<dyn Launcher>,
    color: bool,
}

impl ControlState {
    /// Build a new control state with the default builtin set.
    pub fn new() -> Self {
        Self::with_launcher(Box::new(ForegroundLauncher::new()))
    }

    /// Build a control state that runs external commands through `launcher`.
    pub fn with_launcher(launcher: Box<dyn Launcher>) -> Self {
        Self {
            status: ExitStatus::SUCCESS,
            builtin_map: BuiltinMap::new(),
            launcher,
            color: true,
        }
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    /// Status of the most recent command.
    pub fn status(&self) -> ExitStatus {
        self.status
    }

    /// Render the prompt string with status colouring and the current directory.
    pub fn prompt(&self) -> String {
        let cwd = env::current_dir().ok();
        let home = home_dir();
        generate_prompt(self.status, cwd.as_deref(), home.as_deref(), self.color)
    }

    /// Tokenize and dispatch a single line of user input, updating the status.
    pub fn handle_line(&mut self, line: &str) -> ControlFlow {
        let Some(command) = tokenize(line) else {
            return ControlFlow::EMPTY;
        };
        tracing::debug!("tokens: {:?}", command.tokens());

        let outcome = process::execute(&mut self.builtin_map, self.launcher.as_mut(), &command);
        self.status = outcome.status();

        match outcome {
            Outcome::Continue(_) => ControlFlow::CONTINUE,
            Outcome::Exit(_) => ControlFlow::EXIT,
        }
    }
}

impl Default for ControlState {
    fn default() -> Self {
        Self::new()
    }
}

/// Construct the two-line prompt: shell name and cwd, then a status arrow.
fn generate_prompt(
    status: ExitStatus,
    cwd: Option<&Path>,
    home: Option<&Path>,
    color: bool,
) -> String {
    let cwd = match cwd {
        Some(cwd) => update_cwd(cwd, home),
        None => String::from("?"),
    };

    if !color {
        return format!("┌[mar1bash] {cwd}\n└─> ");
    }

    let arrow = if status.is_success() {
        "└─>".green()
    } else {
        "└─>".red()
    };
    format!(
        "{}{}{}{}\n{} ",
        "┌[".green(),
        "mar1bash".blue(),
        "] ".green(),
        cwd.yellow(),
        arrow
    )
}

/// Replace the home directory portion of the cwd with `~` for a compact prompt.
fn update_cwd(cwd: &Path, home: Option<&Path>) -> String {
    if let Some(rest) = home.and_then(|home| cwd.strip_prefix(home).ok()) {
        if rest.as_os_str().is_empty() {
            return String::from("~");
        }
        return format!("~/{}", rest.display());
    }

    cwd.display().to_string()
}
