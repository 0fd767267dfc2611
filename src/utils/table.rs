//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::pad_right;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    /// Cells wider than this wrap onto extra lines.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn new(header: &str) -> Self {
        Self {
            header: header.to_string(),
            max_width: None,
        }
    }

    pub fn wrapped(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width: Some(max_width.max(1)),
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

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        // Split every cell into display lines first, widths follow from them.
        let cells: Vec<Vec<Vec<String>>> = self
            .rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .enumerate()
                    .map(|(i, col)| {
                        let value = row.get(i).map(String::as_str).unwrap_or("");
                        split_cell(value, col.max_width)
                    })
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                cells
                    .iter()
                    .flat_map(|row| row[i].iter())
                    .map(|l| UnicodeWidthStr::width(l.as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad_right(&col.header, *w));
            out.push(' ');
        }
        out.push('\n');
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &cells {
            let height = row.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                for (cell, w) in row.iter().zip(&widths) {
                    let text = cell.get(line).map(String::as_str).unwrap_or("");
                    out.push_str(&pad_right(text, *w));
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}

fn split_cell(value: &str, max_width: Option<usize>) -> Vec<String> {
    let lines: Vec<String> = match max_width {
        Some(w) => textwrap::wrap(value, w)
            .into_iter()
            .map(|l| l.into_owned())
            .collect(),
        None => value.lines().map(str::to_string).collect(),
    };
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
