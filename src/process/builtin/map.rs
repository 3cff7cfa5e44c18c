use super::Builtin;
use crate::cmd::CommandLine;
use crate::process::Outcome;
use crate::process::cd::Cd;
use crate::process::exit::Exit;

/// Ordered registry of builtins, populated once at construction.
pub struct BuiltinMap {
    entries: Vec<(&'static str, Box<dyn Builtin>)>,
}

impl BuiltinMap {
    /// Registry holding the shell's standard builtins.
    pub fn new() -> Self {
        Self::from_entries(vec![
            ("cd", Box::new(Cd::new()) as Box<dyn Builtin>),
            ("exit", Box::new(Exit::new())),
        ])
    }

    /// Registry holding exactly the given entries, in order.
    pub fn from_entries(entries: Vec<(&'static str, Box<dyn Builtin>)>) -> Self {
        debug_assert!(
            entries
                .iter()
                .enumerate()
                .all(|(i, (name, _))| entries[..i].iter().all(|(other, _)| other != name)),
            "builtin names must be unique"
        );
        BuiltinMap { entries }
    }

    /// Run the builtin named by the command, or `None` when there is none.
    pub fn invoke(&mut self, command: &CommandLine) -> Option<Outcome> {
        let (_, builtin) = self
            .entries
            .iter_mut()
            .find(|(name, _)| *name == command.program())?;
        Some(builtin.call(command.tokens()))
    }
}

impl Default for BuiltinMap {
    fn default() -> Self {
        Self::new()
    }
}
