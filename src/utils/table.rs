//! Table rendering utilities for CLI outputs.

use super::colors::RESET;
use super::formatting::{pad_left, pad_right};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    /// Cells longer than this are wrapped on several lines.
    pub max_width: usize,
    pub align: Align,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
            align: Align::Left,
        }
    }

    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

struct Row {
    cells: Vec<String>,
    color: Option<&'static str>,
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, cells: Vec<String>) {
        self.rows.push(Row { cells, color: None });
    }

    /// Row printed in `color` as a whole.
    pub fn add_colored_row(&mut self, cells: Vec<String>, color: &'static str) {
        self.rows.push(Row {
            cells,
            color: Some(color),
        });
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let longest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.cells.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .max()
                    .unwrap_or(0);
                longest
                    .min(col.max_width)
                    .max(UnicodeWidthStr::width(col.header.as_str()))
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
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
        for row in &self.rows {
            let wrapped: Vec<Vec<String>> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = row.cells.get(i).map(String::as_str).unwrap_or("");
                    if cell.is_empty() {
                        vec![String::new()]
                    } else {
                        textwrap::wrap(cell, *w)
                            .into_iter()
                            .map(|l| l.into_owned())
                            .collect()
                    }
                })
                .collect();

            let height = wrapped.iter().map(Vec::len).max().unwrap_or(1);

            for line in 0..height {
                if let Some(color) = row.color {
                    out.push_str(color);
                }
                for (i, col) in self.columns.iter().enumerate() {
                    let text = wrapped[i].get(line).map(String::as_str).unwrap_or("");
                    let cell = match col.align {
                        Align::Left => pad_right(text, widths[i]),
                        Align::Right => pad_left(text, widths[i]),
                    };
                    out.push_str(&cell);
                    out.push(' ');
                }
                if row.color.is_some() {
                    out.push_str(RESET);
                }
                out.push('\n');
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_long_cells_under_their_column() {
        let mut t = Table::new(vec![Column::new("Day", 3), Column::new("Text", 10)]);
        t.add_row(vec!["Mon".into(), "design review with the team".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0].trim_end(), "Day Text");
        assert!(lines.len() > 3);
        assert!(lines[2].starts_with("Mon design"));
        assert!(lines[3].starts_with("    "));
    }
}
