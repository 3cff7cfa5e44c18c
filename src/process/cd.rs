use crate::conf::home_dir;
use crate::error::CdError;
use crate::process::builtin::Builtin;
use crate::process::{ExitStatus, Outcome};
use normalize_path::NormalizePath;
use std::cell::RefCell;
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// The `cd` builtin.
///
/// `cd` and `cd ~` go to `$HOME`, `cd -` returns to `$OLDPWD` and prints it,
/// anything else is taken as a literal path. `PWD` and `OLDPWD` track the
/// logical directory on success; nothing changes on failure.
pub struct Cd {
    output: Option<Rc<RefCell<Vec<u8>>>>,
}

impl Builtin for Cd {
    fn call(&mut self, args: &[String]) -> Outcome {
        let operands = args.get(1..).unwrap_or_default();
        match self.change_directory(operands) {
            Ok(()) => Outcome::Continue(ExitStatus::SUCCESS),
            Err(err) => {
                eprintln!("{err}");
                Outcome::Continue(ExitStatus::Code(err.code()))
            }
        }
    }
}

impl Cd {
    pub fn new() -> Self {
        Cd { output: None }
    }

    /// Send what `cd -` prints into `buffer` instead of stdout.
    pub fn capture_output_buffer(&mut self, buffer: Rc<RefCell<Vec<u8>>>) {
        self.output = Some(buffer);
    }

    fn change_directory(&mut self, operands: &[String]) -> Result<(), CdError> {
        if operands.len() > 1 {
            return Err(CdError::TooManyArguments);
        }

        match operands.first().map(String::as_str) {
            None | Some("~") => {
                let home = home_dir().ok_or(CdError::HomeNotFound(String::new()))?;
                enter(&home).map_err(|_| CdError::HomeNotFound(home.display().to_string()))
            }
            Some("-") => {
                let previous = env::var("OLDPWD")
                    .ok()
                    .filter(|dir| !dir.is_empty())
                    .ok_or(CdError::OldPwdNotSet)?;
                enter(Path::new(&previous))
                    .map_err(|_| CdError::NoSuchDirectory(previous.clone()))?;
                self.print_line(&previous);
                Ok(())
            }
            Some(path) => {
                enter(Path::new(path)).map_err(|_| CdError::NoSuchDirectory(path.to_string()))
            }
        }
    }

    fn print_line(&self, line: &str) {
        let written = match &self.output {
            Some(buffer) => writeln!(buffer.borrow_mut(), "{line}"),
            None => writeln!(io::stdout(), "{line}"),
        };
        if let Err(err) = written {
            tracing::warn!("cd: unable to print directory: {err}");
        }
    }
}

impl Default for Cd {
    fn default() -> Self {
        Self::new()
    }
}

/// Change into `target`, then update `OLDPWD` and `PWD`.
///
/// Only the chdir itself can fail; once it succeeded the move is reported as
/// a success even if the new directory cannot be resolved.
fn enter(target: &Path) -> io::Result<()> {
    let previous = logical_pwd();
    env::set_current_dir(target)?;

    let logical = match &previous {
        _ if target.is_absolute() => target.normalize(),
        Some(previous) => previous.join(target).normalize(),
        None => target.to_path_buf(),
    };
    let pwd = resolve_pwd(logical, env::current_dir());
    tracing::debug!("cd: now in {}", pwd.display());

    // SAFETY: the shell runs on a single thread.
    unsafe {
        if let Some(previous) = previous {
            env::set_var("OLDPWD", previous);
        }
        env::set_var("PWD", pwd);
    }
    Ok(())
}

/// The logical path when it names the physical directory, else the physical one.
fn resolve_pwd(logical: PathBuf, physical: io::Result<PathBuf>) -> PathBuf {
    match physical {
        Ok(physical) if !same_directory(&logical, &physical) => physical,
        Ok(_) => logical,
        Err(err) => {
            tracing::warn!("cd: unable to resolve new directory: {err}");
            logical
        }
    }
}

/// `$PWD` when it still names the working directory, otherwise the physical path.
fn logical_pwd() -> Option<PathBuf> {
    let physical = env::current_dir().ok();
    match (env::var_os("PWD").map(PathBuf::from), &physical) {
        (Some(pwd), Some(physical)) if pwd.is_absolute() && same_directory(&pwd, physical) => {
            Some(pwd)
        }
        _ => physical,
    }
}

fn same_directory(lhs: &Path, rhs: &Path) -> bool {
    match (lhs.canonicalize(), rhs.canonicalize()) {
        (Ok(lhs), Ok(rhs)) => lhs == rhs,
        _ => false,
    }
}
