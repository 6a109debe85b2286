//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub right_align: bool,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: false,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            right_align: true,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Column widths fit the widest of header and cells.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push_str("  ");
        }
        truncate_trailing(&mut out);
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, (col, w)) in self.columns.iter().zip(&widths).enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                if col.right_align {
                    out.push_str(&pad_left(cell, *w));
                } else {
                    out.push_str(&pad_right(cell, *w));
                }
                out.push_str("  ");
            }
            truncate_trailing(&mut out);
            out.push('\n');
        }

        out
    }
}

fn truncate_trailing(s: &mut String) {
    let trimmed = s.trim_end_matches(' ').len();
    s.truncate(trimmed);
}
