pub mod map;

use crate::process::Outcome;

/// A command implemented inside the shell process.
pub trait Builtin {
    /// Run the builtin. `args` is the full token list, name included.
    fn call(&mut self, args: &[String]) -> Outcome;
}
