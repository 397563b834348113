//! ABOUTME: ANSI highlight helpers used when rendering headers

pub const RESET: &str = "\x1b[0m";
pub const BLACK_ON_CYAN: &str = "\x1b[30;46m";

/// Wrap `text` in the given SGR code and a reset
pub fn paint(code: &str, text: &str) -> String {
    format!("{}{}{}", code, text, RESET)
}

/// Black text on a cyan background
pub fn black_on_cyan(text: &str) -> String {
    paint(BLACK_ON_CYAN, text)
}
