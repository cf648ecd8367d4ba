//! Cursor control escape sequences.
//!
//! The sequences come from crossterm's command types, rendered to strings
//! with [`Command::write_ansi`] instead of being executed against a writer.
//! Callers concatenate them into a line and write it themselves.

use crossterm::cursor::{Hide, MoveToColumn, Show};
use crossterm::Command;

fn ansi_string(cmd: impl Command) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = cmd.write_ansi(&mut out);
    out
}

/// `ESC [ ? 25 l`
pub fn hide_cursor() -> String {
    ansi_string(Hide)
}

/// `ESC [ ? 25 h`
pub fn show_cursor() -> String {
    ansi_string(Show)
}

/// Move the cursor to the zero-based column `x` (`ESC [ x+1 G`).
pub fn cursor_to_column(x: u16) -> String {
    ansi_string(MoveToColumn(x))
}

/// Move to column `x`, then write `text`.
pub fn print_at_x(x: u16, text: &str) -> String {
    let mut out = cursor_to_column(x);
    out.push_str(text);
    out
}

/// True if `s` contains any of the cursor sequences above.
#[cfg(test)]
pub(crate) fn contains_cursor_control(s: &str) -> bool {
    if s.contains("\x1b[?25l") || s.contains("\x1b[?25h") {
        return true;
    }
    // CHA: ESC [ <digits> G
    let bytes = s.as_bytes();
    let mut i = 0;
    while i + 2 < bytes.len() {
        if bytes[i] == 0x1b && bytes[i + 1] == b'[' {
            let mut j = i + 2;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > i + 2 && j < bytes.len() && bytes[j] == b'G' {
                return true;
            }
        }
        i += 1;
    }
    false
}
