//! Row-oriented tabular data model.
//!
//! A [`Dataset`] is the header plus the ordered [`Record`]s produced by the
//! [`CsvParser`](crate::csv_parser::CsvParser). Each cell is a [`Value`]
//! decided independently per cell, so a single field may hold integers in
//! some rows and text in others.
//!
//! # Example
//!
//! ```
//! use steel_insight::dataset::{Record, Value};
//!
//! let mut rec = Record::new();
//! rec.insert("SampleID", Value::Text("S-01".into()));
//! rec.insert("Hardness_HRC", Value::Integer(52));
//! assert_eq!(rec.numeric("Hardness_HRC"), Some(52.0));
//! assert_eq!(rec.numeric("SampleID"), None);
//! ```

use crate::csv_parser::CsvParser;
use crate::error::InsightError;
use std::fmt;
use std::path::Path;

// ── Value ─────────────────────────────────────────────────────────────

/// A single coerced cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text without a decimal point or exponent that parsed as `i64`.
    Integer(i64),
    /// Text with a decimal point or exponent that parsed as `f64`.
    Float(f64),
    /// Anything else, kept verbatim.
    Text(String),
}

impl Value {
    /// Returns the value widened to `f64` if it is numeric.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Text(_) => None,
        }
    }

    /// Returns `true` for [`Value::Integer`] and [`Value::Float`].
    #[inline]
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => f.write_str(&format_float(*v)),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

/// Formats a float in shortest round-trip form, keeping a fractional part
/// for integral values (`50.0`, not `50`).
///
/// ```
/// use steel_insight::dataset::format_float;
///
/// assert_eq!(format_float(50.0), "50.0");
/// assert_eq!(format_float(0.35), "0.35");
/// assert_eq!(format_float(f64::NAN), "nan");
/// ```
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v == f64::INFINITY {
        "inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{v:?}")
    }
}

/// Rounds to 3 decimal places.
///
/// Rounds the exact binary value, so `1.0005` (stored just below the tie)
/// becomes `1.0`. Scaling by 1000 first would round twice.
pub fn round3(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    format!("{v:.3}").parse().unwrap_or(v)
}

// ── Record ────────────────────────────────────────────────────────────

/// One parsed data row: field name → value, in header order.
///
/// A record only holds the fields its source row actually supplied, so a
/// short row yields a record without its trailing keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Sets `key` to `value`. An existing key keeps its position and takes
    /// the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Looks up a field by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns the field as `f64` when present and numeric.
    pub fn numeric(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Returns `true` if the record holds `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of fields present.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates `(name, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut rec = Record::new();
        for (k, v) in iter {
            rec.insert(k, v);
        }
        rec
    }
}

// ── Dataset ───────────────────────────────────────────────────────────

/// Header plus the records parsed against it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    header: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Creates a dataset from a header and its records.
    pub fn new(header: Vec<String>, records: Vec<Record>) -> Self {
        Self { header, records }
    }

    /// Reads and parses a comma-delimited file.
    ///
    /// Shorthand for `CsvParser::new().parse_file(path)`; use
    /// [`CsvParser`] directly for another delimiter.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, InsightError> {
        CsvParser::new().parse_file(path)
    }

    /// Field names in file order.
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of data records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are no data records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Extracts `key` as a numeric column. See [`numeric_column`].
    pub fn numeric_column(&self, key: &str) -> Vec<f64> {
        numeric_column(&self.records, key)
    }
}

// ── Column extraction ─────────────────────────────────────────────────

/// Pulls `key` across records as `f64`, in record order.
///
/// Records where the field is absent or holds text are skipped, so the
/// result may be shorter than `records`. Integers are widened.
///
/// ```
/// use steel_insight::csv_parser::CsvParser;
/// use steel_insight::dataset::numeric_column;
///
/// let ds = CsvParser::new().parse_str("id,x\nA,1\nB,n/a\nC,2.5\n");
/// assert_eq!(numeric_column(ds.records(), "x"), vec![1.0, 2.5]);
/// ```
pub fn numeric_column(records: &[Record], key: &str) -> Vec<f64> {
    records.iter().filter_map(|r| r.numeric(key)).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────
