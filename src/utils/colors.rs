/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Paint a label (e.g. "Most Popular Month:") in cyan.
pub fn label(text: &str) -> String {
    format!("{CYAN}{text}{RESET}")
}

/// Highlight a computed value, or grey out the "no data" placeholder.
pub fn value<T: std::fmt::Display>(v: Option<T>) -> String {
    match v {
        Some(v) => format!("{GREEN}{v}{RESET}"),
        None => format!("{GREY}no data{RESET}"),
    }
}

pub fn note(text: &str) -> String {
    format!("{YELLOW}{text}{RESET}")
}
