//! Fixed-width text tables.
//!
//! Anything that can look up a display string by column key can be
//! rendered: parsed [`Record`]s and [`NumericSummary`] rows both implement
//! [`TableRow`].
//!
//! ```
//! use steel_insight::csv_parser::CsvParser;
//! use steel_insight::table::render_table;
//!
//! let ds = CsvParser::new().parse_str("id,hrc\nS1,52\nS22,48.5\n");
//! let text = render_table(ds.records(), &["id", "hrc"]);
//! assert_eq!(text, "id  | hrc \n----+-----\nS1  | 52  \nS22 | 48.5");
//! ```

use crate::dataset::Record;
use crate::profiling::NumericSummary;

const COLUMN_SEP: &str = " | ";
const RULE_SEP: &str = "-+-";

/// A row that exposes display strings by column key.
pub trait TableRow {
    /// Display string for `key`, or `None` if the row has no such column.
    fn cell(&self, key: &str) -> Option<String>;
}

impl TableRow for Record {
    fn cell(&self, key: &str) -> Option<String> {
        self.get(key).map(ToString::to_string)
    }
}

impl TableRow for NumericSummary {
    fn cell(&self, key: &str) -> Option<String> {
        NumericSummary::cell(self, key)
    }
}

impl<T: TableRow + ?Sized> TableRow for &T {
    fn cell(&self, key: &str) -> Option<String> {
        (**self).cell(key)
    }
}

/// Renders rows as an aligned table: a header line, a dashed rule, then
/// one line per row.
///
/// Each column is as wide as its longest label or cell (in characters).
/// Every cell is left-justified. Missing cells render empty. Lines are
/// joined by `\n` with no trailing newline.
pub fn render_table<R: TableRow, K: AsRef<str>>(rows: &[R], keys: &[K]) -> String {
    let keys: Vec<&str> = keys.iter().map(|k| k.as_ref()).collect();
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| keys.iter().map(|k| r.cell(k).unwrap_or_default()).collect())
        .collect();

    let widths: Vec<usize> = keys
        .iter()
        .enumerate()
        .map(|(i, k)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .fold(k.chars().count(), usize::max)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(join_padded(keys.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join(RULE_SEP),
    );
    for row in &cells {
        lines.push(join_padded(row.iter().map(String::as_str), &widths));
    }
    lines.join("\n")
}

fn join_padded<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    values
        .zip(widths)
        .map(|(v, &w)| format!("{v:<w$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_SEP)
}
