//! rustyline helper wiring.

pub mod helper;

pub use helper::ShellHelper;
