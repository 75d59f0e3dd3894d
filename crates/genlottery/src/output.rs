//! Plain-text rendering for `--text` mode.
//!
//! One line of output per generated line, then the session message.
//! Messages get a splash of color when stdout is an interactive terminal.

use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};

use owo_colors::OwoColorize;

use genlottery_core::DisplayPayload;

/// Whether color output should be enabled.
fn should_color() -> bool {
    io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err()
}

/// Render a payload as terminal text.
///
/// `saved_view` prefixes each line with `SAVED`, matching the original
/// tool's display of previously persisted results.
pub fn render(payload: &DisplayPayload, saved_view: bool) -> String {
    let mut out = String::new();
    let prefix = if saved_view { "SAVED " } else { "" };

    for (index, line) in payload.results.iter().enumerate() {
        let _ = writeln!(
            out,
            "{prefix}{} Line {}: {line}",
            payload.lottery_type,
            index + 1
        );
    }

    if !payload.message.is_empty() {
        if should_color() {
            let _ = writeln!(out, "{}", payload.message.bold());
        } else {
            let _ = writeln!(out, "{}", payload.message);
        }
    }

    out
}

/// Print rendered output to stdout.
pub fn print_output(output: &str) {
    if output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = write!(stdout, "{output}");
}
