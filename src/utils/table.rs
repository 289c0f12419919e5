//! Table rendering utilities for CLI outputs.

use crate::utils::formatting::visible_width;

pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
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

    /// Render with auto-sized columns and a separator rule under the header.
    pub fn render(&self, separator: &str) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .map(|row| visible_width(&row[i]))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        for (col, width) in self.columns.iter().zip(&widths) {
            out.push_str(&format!("{:<width$}  ", col.header, width = *width));
        }
        out.push('\n');

        let rule_width = widths.iter().sum::<usize>() + 2 * widths.len();
        out.push_str(&separator.repeat(rule_width));
        out.push('\n');

        for row in &self.rows {
            for ((cell, col), width) in row.iter().zip(&self.columns).zip(&widths) {
                let pad = width.saturating_sub(visible_width(cell));
                match col.align {
                    Align::Left => {
                        out.push_str(cell);
                        out.push_str(&" ".repeat(pad + 2));
                    }
                    Align::Right => {
                        out.push_str(&" ".repeat(pad));
                        out.push_str(cell);
                        out.push_str("  ");
                    }
                }
            }
            out.push('\n');
        }

        out
    }
}
