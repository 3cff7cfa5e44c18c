//! Whitespace tokenizer producing the command line handed to dispatch.

use std::fmt;

/// A tokenized, non-empty command line. The first token names the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    tokens: Vec<String>,
}

impl CommandLine {
    /// Name of the builtin or program to run.
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    /// Operands following the program name.
    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    /// The full token sequence, program name included.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Split a raw input line on runs of whitespace.
///
/// Returns `None` when the line holds nothing but whitespace, so callers can
/// tell "nothing to do" apart from a real command. No quoting or expansion is
/// performed.
pub fn tokenize(line: &str) -> Option<CommandLine> {
    let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        return None;
    }

    Some(CommandLine { tokens })
}
