//! mar1bash: a small interactive shell.

pub mod cmd;
pub mod complete;
pub mod conf;
pub mod control;
pub mod control_state;
pub mod error;
pub mod logger;
pub mod process;
pub mod signal;
