//! Table rendering utilities for CLI outputs.

use super::formatting::{pad_left, pad_right, truncate, visible_width};
use ansi_term::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
    /// Cells wider than this are truncated with "..."
    pub max_width: usize,
}

impl Column {
    pub fn left(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
            max_width,
        }
    }

    pub fn right(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
            max_width,
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

    /// Width of each column: widest of header and (truncated) cells.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| visible_width(&truncate(cell, col.max_width)))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Render header, separator line and rows. `sep` is repeated to draw
    /// the separator (first char only).
    pub fn render(&self, sep: &str) -> String {
        let widths = self.widths();
        let bold = Style::new().bold();
        let sep_char = sep.chars().next().unwrap_or('-');

        let mut out = String::new();

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, w)| align_cell(&bold.paint(col.header.as_str()).to_string(), *w, col.align))
            .collect();
        out.push_str(header.join("  ").trim_end());
        out.push('\n');

        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        out.push_str(&sep_char.to_string().repeat(total));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(i, (col, w))| {
                    let value = row.get(i).map(String::as_str).unwrap_or("");
                    align_cell(&truncate(value, col.max_width), *w, col.align)
                })
                .collect();
            out.push_str(cells.join("  ").trim_end());
            out.push('\n');
        }

        out
    }
}

fn align_cell(s: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(s, width),
        Align::Right => pad_left(s, width),
    }
}
