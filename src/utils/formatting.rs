//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to `width` terminal columns (station names may hold non-ASCII text).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// es: 93784 → "1d 02h 03m 04s", 59 → "00h 00m 59s"
pub fn secs2readable(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let s = secs.abs();
    let days = s / 86_400;
    let hours = (s % 86_400) / 3_600;
    let minutes = (s % 3_600) / 60;
    let seconds = s % 60;

    if days > 0 {
        format!("{sign}{days}d {hours:02}h {minutes:02}m {seconds:02}s")
    } else {
        format!("{sign}{hours:02}h {minutes:02}m {seconds:02}s")
    }
}
