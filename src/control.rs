//! The interactive read-dispatch loop.

use crate::complete::ShellHelper;
use crate::conf;
use crate::control_state::{ControlFlow, ControlState};
use crate::error::ShellError;
use crate::logger;
use crate::process::welcome;
use crate::signal::{self, SignalDisposition};
use rustyline::error::ReadlineError;
use rustyline::history::{DefaultHistory, History};
use rustyline::{Config, Editor, Helper};
use std::env;
use std::io::{self, Write};

/// Source of input lines for the control loop.
pub trait LineEditor {
    /// Block until a line is read. Ctrl-C yields `Interrupted`, end of input `Eof`.
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError>;
    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool>;
}

impl<H: Helper, I: History> LineEditor for Editor<H, I> {
    fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        Editor::readline(self, prompt)
    }

    fn add_history_entry(&mut self, entry: &str) -> rustyline::Result<bool> {
        Editor::add_history_entry(self, entry)
    }
}

/// Configure the process and run the shell until `exit` or end of input.
pub fn control_loop() -> Result<(), ShellError> {
    if let Err(err) = logger::init() {
        eprintln!("mar1bash: unable to install logger: {err}");
    }
    let config = conf::load();
    logger::set_level(config.log.level_filter());
    if let Some(path) = config.source_path() {
        tracing::info!("configuration read from {}", path.display());
    }
    ensure_working_directory();

    let mut stdout = io::stdout();
    if config.ui.banner() {
        welcome::welcome(&mut stdout, config.ui.color())?;
    }

    let editor_config = Config::builder()
        .max_history_size(config.history.max_entries())?
        .history_ignore_dups(config.history.ignore_duplicates())?
        .auto_add_history(false)
        .build();
    let mut editor: Editor<ShellHelper, DefaultHistory> = Editor::with_config(editor_config)?;
    editor.set_helper(Some(ShellHelper::new()));

    SignalDisposition::ShellHandler.apply()?;

    let mut control_state = ControlState::new();
    control_state.set_color(config.ui.color());
    run_loop_with_editor(&mut control_state, &mut editor, &mut stdout)
}

/// Drive `control_state` with lines from `editor`, writing separators and the
/// farewell to `sink`.
pub fn run_loop_with_editor(
    control_state: &mut ControlState,
    editor: &mut impl LineEditor,
    sink: &mut impl Write,
) -> Result<(), ShellError> {
    loop {
        signal::take_pending_interrupt();
        let prompt = control_state.prompt();
        sink.flush()?;

        let readline = editor.readline(&prompt);
        let interrupted = signal::take_pending_interrupt();

        // rustyline restarts its read on EINTR, so a SIGINT raised during the
        // read cannot abort it; the line typed afterwards is still dispatched.
        if interrupted {
            tracing::debug!("SIGINT received while reading input");
        }

        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = editor.add_history_entry(&line) {
                        tracing::warn!("unable to record history entry: {err}");
                    }
                }

                match control_state.handle_line(&line) {
                    ControlFlow::CONTINUE => {}
                    ControlFlow::EMPTY => writeln!(sink)?,
                    ControlFlow::EXIT => {
                        farewell(sink)?;
                        return Ok(());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                writeln!(sink)?;
            }
            Err(ReadlineError::Eof) => {
                farewell(sink)?;
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }
    }
}

fn farewell(sink: &mut impl Write) -> io::Result<()> {
    writeln!(sink, "\nGoodbye from mar1bash!")?;
    sink.flush()
}

/// Fall back to `$HOME` when the inherited working directory no longer exists.
fn ensure_working_directory() {
    if env::current_dir().is_ok() {
        return;
    }

    match conf::home_dir() {
        Some(home) => match env::set_current_dir(&home) {
            Ok(()) => tracing::warn!("working directory missing, moved to {}", home.display()),
            Err(err) => tracing::warn!("working directory missing and HOME unusable: {err}"),
        },
        None => tracing::warn!("working directory missing and HOME not set"),
    }
}
