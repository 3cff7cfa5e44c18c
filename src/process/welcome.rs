use crossterm::style::Stylize;
use std::io::{self, Write};
use terminal_size::{Width, terminal_size};

const DEFAULT_WIDTH: usize = 80;

const BANNER: [&str; 7] = [
    "███╗   ███╗ █████╗ ██████╗  ██╗██████╗  █████╗ ███████╗██╗  ██╗",
    "████╗ ████║██╔══██╗██╔══██╗███║██╔══██╗██╔══██╗██╔════╝██║  ██║",
    "██╔████╔██║███████║██████╔╝╚██║██████╔╝███████║███████╗███████║",
    "██║╚██╔╝██║██╔══██║██╔══██╗ ██║██╔══██╗██╔══██║╚════██║██╔══██║",
    "██║ ╚═╝ ██║██║  ██║██║  ██║ ██║██████╔╝██║  ██║███████║██║  ██║",
    "╚═╝     ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝ ╚═╝╚═════╝ ╚═╝  ╚═╝╚══════╝╚═╝  ╚═╝",
    "---------------------------------------------------------------",
];

/// Print the startup banner, centred on the terminal width when available.
pub fn welcome(sink: &mut impl Write, color: bool) -> io::Result<()> {
    let width = terminal_size()
        .and_then(|(Width(w), _)| usize::try_from(w).ok())
        .filter(|w| *w > 0)
        .unwrap_or(DEFAULT_WIDTH);

    for line in BANNER {
        let padded_line = center_line(line, width);
        if color {
            writeln!(sink, "{}", padded_line.green())?;
        } else {
            writeln!(sink, "{padded_line}")?;
        }
    }
    sink.flush()
}

/// Centre a single line of text within the provided width.
fn center_line(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if width <= len {
        return text.to_string();
    }
    let padding = (width - len) / 2;
    format!("{}{text}", " ".repeat(padding))
}
