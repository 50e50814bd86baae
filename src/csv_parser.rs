//! Delimited-text parser with per-cell type coercion.
//!
//! Parses text into a [`Dataset`]: the first non-blank line is the header,
//! every later non-blank line is a record. Each cell is coerced on its own:
//!
//! 1. Contains `.` or `e`/`E` → try `f64` ([`Value::Float`])
//! 2. Otherwise → try `i64` ([`Value::Integer`])
//! 3. Either parse fails → keep the original text ([`Value::Text`])
//!
//! Parsing never fails on content. Rows shorter than the header yield
//! records without their trailing fields; extra values past the header
//! are dropped.
//!
//! # Limitations
//!
//! There is no quoting or escaping. A value that contains the delimiter is
//! split like any other.
//!
//! # Example
//!
//! ```
//! use steel_insight::csv_parser::CsvParser;
//! use steel_insight::dataset::Value;
//!
//! let csv = "SampleID,Carbon_pct,Hardness_HRC\nS1,0.45,52\n\nS2,0.60,58\n";
//! let ds = CsvParser::new().parse_str(csv);
//! assert_eq!(ds.len(), 2);
//! assert_eq!(ds.records()[0].get("Carbon_pct"), Some(&Value::Float(0.45)));
//! assert_eq!(ds.records()[1].get("Hardness_HRC"), Some(&Value::Integer(58)));
//! ```

use crate::dataset::{Dataset, Record, Value};
use crate::error::InsightError;
use std::path::Path;
use tracing::debug;

/// Parser configuration and entry point.
#[derive(Debug, Clone)]
pub struct CsvParser {
    delimiter: u8,
}

impl CsvParser {
    /// Creates a parser with a comma delimiter.
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Sets the field delimiter (default: comma).
    pub fn delimiter(mut self, delim: u8) -> Self {
        self.delimiter = delim;
        self
    }

    /// Parses delimited text into a [`Dataset`].
    ///
    /// Input with no non-blank line yields an empty dataset.
    pub fn parse_str(&self, input: &str) -> Dataset {
        let (dataset, stats) = self.parse_with_stats(input);
        debug!(
            fields = dataset.header().len(),
            records = dataset.len(),
            blank_lines = stats.blank_lines,
            short_rows = stats.short_rows,
            long_rows = stats.long_rows,
            "parsed delimited input"
        );
        dataset
    }

    fn parse_with_stats(&self, input: &str) -> (Dataset, ParseStats) {
        let input = input.strip_prefix('\u{feff}').unwrap_or(input);
        let delim = self.delimiter as char;
        let mut stats = ParseStats::default();

        let mut lines = input.lines().map(str::trim);
        let header: Vec<String> = loop {
            match lines.next() {
                None => return (Dataset::default(), stats),
                Some("") => stats.blank_lines += 1,
                Some(line) => break line.split(delim).map(str::to_string).collect(),
            }
        };

        let mut records = Vec::new();
        for line in lines {
            if line.is_empty() {
                stats.blank_lines += 1;
                continue;
            }
            let parts: Vec<&str> = line.split(delim).collect();
            if parts.len() < header.len() {
                stats.short_rows += 1;
            } else if parts.len() > header.len() {
                stats.long_rows += 1;
            }
            let record: Record = header
                .iter()
                .zip(parts)
                .map(|(key, raw)| (key.as_str(), coerce(raw)))
                .collect();
            records.push(record);
        }

        (Dataset::new(header, records), stats)
    }

    /// Reads a UTF-8 file from disk and parses it.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Dataset, InsightError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| InsightError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.parse_str(&content))
    }
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Line counts gathered while parsing, for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ParseStats {
    blank_lines: usize,
    short_rows: usize,
    long_rows: usize,
}

/// Coerces one raw cell into a [`Value`].
///
/// Surrounding whitespace is ignored for the numeric parse; text is kept
/// exactly as it appeared.
pub fn coerce(raw: &str) -> Value {
    let trimmed = raw.trim();
    let looks_float = trimmed.contains('.') || trimmed.contains(['e', 'E']);
    let parsed = if looks_float {
        trimmed.parse::<f64>().ok().map(Value::Float)
    } else {
        trimmed.parse::<i64>().ok().map(Value::Integer)
    };
    parsed.unwrap_or_else(|| Value::Text(raw.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────
