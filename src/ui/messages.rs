//! One-line status messages for the non-interactive commands.

use crate::utils::colors::{BLUE, BOLD, GREEN, RED, RESET, YELLOW};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn tag(&self) -> (&'static str, &'static str) {
        match self {
            Level::Info => (BLUE, "info"),
            Level::Success => (GREEN, "ok"),
            Level::Warning => (YELLOW, "warn"),
            Level::Error => (RED, "error"),
        }
    }
}

/// `[tag] message`, with the tag colored by level.
pub fn status_line<T: fmt::Display>(level: Level, msg: T) -> String {
    let (color, tag) = level.tag();
    format!("{BOLD}{color}[{tag}]{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", status_line(Level::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", status_line(Level::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", status_line(Level::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", status_line(Level::Error, msg));
}

/// Bold blue title line for a report section.
pub fn header<T: fmt::Display>(msg: T) -> String {
    format!("{BOLD}{BLUE}{msg}{RESET}")
}
