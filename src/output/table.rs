//! Table formatting for CLI output.
//!
//! Aligned, human-readable tables with auto-sized columns and truncation
//! for overlong cells.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a single cell is allowed to render.
const MAX_CELL_WIDTH: usize = 60;

/// A simple table formatter.
#[derive(Debug, Default)]
pub struct TableFormatter {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableFormatter {
    /// Create a new table formatter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column headers.
    pub fn headers<I, S>(&mut self, headers: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    /// Add a row to the table.
    pub fn row<I, S>(&mut self, cells: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    /// Print the table to stdout.
    pub fn print(&self) {
        print!("{}", self.render());
    }

    /// Render the table as a string.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut output = String::new();

        if !self.headers.is_empty() {
            output.push_str(&render_row(&self.headers, &widths));
            output.push('\n');
            let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            output.push_str(&sep.join("  "));
            output.push('\n');
        }

        for row in &self.rows {
            output.push_str(&render_row(row, &widths));
            output.push('\n');
        }

        output
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self
            .headers
            .len()
            .max(self.rows.iter().map(Vec::len).max().unwrap_or(0));

        let mut widths = vec![0usize; columns];
        for (i, header) in self.headers.iter().enumerate() {
            widths[i] = widths[i].max(UnicodeWidthStr::width(header.as_str()));
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(UnicodeWidthStr::width(cell.as_str()));
            }
        }
        for width in &mut widths {
            *width = (*width).min(MAX_CELL_WIDTH);
        }
        widths
    }
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let parts: Vec<String> = cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(0);
            let cell_width = UnicodeWidthStr::width(cell.as_str());
            if cell_width <= width {
                format!("{}{}", cell, " ".repeat(width - cell_width))
            } else {
                truncate(cell, width)
            }
        })
        .collect();

    parts.join("  ").trim_end().to_string()
}

/// Truncate a string to fit within a given display width.
fn truncate(s: &str, max_width: usize) -> String {
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let mut width = 0;
    let mut out = String::new();
    for c in s.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if width + char_width + 3 > max_width {
            out.push_str("...");
            break;
        }
        out.push(c);
        width += char_width;
    }
    out
}
