//! Input line parsing.

pub mod tokenize;

pub use tokenize::{CommandLine, tokenize};
