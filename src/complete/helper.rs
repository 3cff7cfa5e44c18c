use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline_derive::{Completer, Helper, Hinter, Validator};
use std::borrow::Cow::{self, Owned};

/// Line editor helper: shows history matches as bold inline hints.
#[derive(Completer, Helper, Hinter, Validator)]
pub struct ShellHelper {
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl ShellHelper {
    pub fn new() -> Self {
        Self {
            hinter: HistoryHinter::new(),
        }
    }
}

impl Default for ShellHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for ShellHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(format!("\x1b[1m{hint}\x1b[m"))
    }
}
