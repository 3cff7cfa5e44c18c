use crate::process::builtin::Builtin;
use crate::process::{ExitStatus, Outcome};

/// Implements the `exit` builtin, allowing the shell to terminate cleanly.
///
/// Accepts at most one operand. The operand is not interpreted; the shell
/// always exits successfully.
pub struct Exit {}

impl Builtin for Exit {
    fn call(&mut self, args: &[String]) -> Outcome {
        if args.len() > 2 {
            eprintln!("exit: too many arguments");
            return Outcome::Continue(ExitStatus::Code(1));
        }

        Outcome::Exit(ExitStatus::SUCCESS)
    }
}

impl Exit {
    /// Construct a new exit builtin instance.
    pub fn new() -> Self {
        Exit {}
    }
}

impl Default for Exit {
    fn default() -> Self {
        Self::new()
    }
}
