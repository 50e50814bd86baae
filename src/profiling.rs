//! Descriptive statistics and per-field summaries.
//!
//! All functions tolerate degenerate input. Empty sequences yield `0.0`
//! rather than an error or NaN, so a report can always be rendered.
//!
//! # Quartile convention
//!
//! [`quartiles`] uses Tukey's hinges (exclusive median split):
//!
//! - even `n`: lower half = first `n/2` values, upper half = last `n/2`
//! - odd `n`: the middle value is excluded from both halves
//!
//! Q1 and Q3 are the medians of the lower and upper half. This differs from
//! interpolating quantile methods; `[1, 2, 3, 4, 5]` gives Q1 = 1.5 and
//! Q3 = 4.5.
//!
//! # Example
//!
//! ```
//! use steel_insight::profiling::{iqr_outliers, quartiles};
//!
//! let q = quartiles(&[1.0, 2.0, 3.0, 4.0]);
//! assert_eq!((q.q1, q.median, q.q3), (1.5, 2.5, 3.5));
//!
//! let out = iqr_outliers(&[1.0, 2.0, 2.5, 3.0, 2.0, 100.0]);
//! assert_eq!(out.outliers, vec![100.0]);
//! ```

use crate::dataset::{format_float, numeric_column, round3, Record};
use tracing::debug;
use u_numflow::stats;

/// Tukey fence multiplier.
const IQR_FENCE: f64 = 1.5;

// ── Basic statistics ──────────────────────────────────────────────────

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(xs: &[f64]) -> f64 {
    stats::mean(xs).unwrap_or(0.0)
}

/// Median of an already sorted slice; `0.0` when empty.
///
/// Even length averages the two middle values.
pub fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return 0.0;
    }
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    }
}

/// Sample standard deviation (denominator `n - 1`).
///
/// `0.0` for `n < 2` and exactly `0.0` when every value is identical.
pub fn stdev_sample(xs: &[f64]) -> f64 {
    let n = xs.len();
    if n < 2 || xs.iter().all(|&x| x == xs[0]) {
        return 0.0;
    }
    stats::std_dev(xs).unwrap_or(0.0)
}

/// Returns a sorted copy. NaN sorts after every number.
pub(crate) fn sorted(xs: &[f64]) -> Vec<f64> {
    let mut s = xs.to_vec();
    s.sort_by(f64::total_cmp);
    s
}

// ── Quartiles & outliers ──────────────────────────────────────────────

/// First quartile, median and third quartile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
}

impl Quartiles {
    /// Interquartile range (Q3 - Q1).
    #[inline]
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Computes Tukey-hinge quartiles. The input need not be sorted.
///
/// All three are `0.0` for an empty slice. A single value has empty halves;
/// Q1 and Q3 then fall back to the median so `min <= Q1 <= Q3 <= max` holds.
///
/// ```
/// use steel_insight::profiling::quartiles;
///
/// let q = quartiles(&[5.0, 1.0, 4.0, 2.0, 3.0]);
/// assert_eq!(q.median, 3.0);
/// assert_eq!(q.q1, 1.5);
/// assert_eq!(q.q3, 4.5);
/// ```
pub fn quartiles(xs: &[f64]) -> Quartiles {
    if xs.is_empty() {
        return Quartiles {
            q1: 0.0,
            median: 0.0,
            q3: 0.0,
        };
    }
    let s = sorted(xs);
    let n = s.len();
    let half = n / 2;
    let lower = &s[..half];
    let upper = if n % 2 == 0 { &s[half..] } else { &s[half + 1..] };
    let med = median(&s);
    if lower.is_empty() {
        return Quartiles {
            q1: med,
            median: med,
            q3: med,
        };
    }
    Quartiles {
        q1: median(lower),
        median: med,
        q3: median(upper),
    }
}

/// Result of IQR outlier detection.
#[derive(Debug, Clone, PartialEq)]
pub struct IqrOutliers {
    /// Values strictly outside `[Q1 - 1.5·IQR, Q3 + 1.5·IQR]`, in input order.
    pub outliers: Vec<f64>,
    /// Quartiles the fences were built from.
    pub quartiles: Quartiles,
}

impl IqrOutliers {
    /// Lower and upper Tukey fences.
    pub fn fences(&self) -> (f64, f64) {
        let iqr = self.quartiles.iqr();
        (
            self.quartiles.q1 - IQR_FENCE * iqr,
            self.quartiles.q3 + IQR_FENCE * iqr,
        )
    }
}

/// Flags values outside the Tukey fences (k = 1.5).
///
/// Values exactly on a fence are not outliers.
pub fn iqr_outliers(xs: &[f64]) -> IqrOutliers {
    let q = quartiles(xs);
    let iqr = q.iqr();
    let lower = q.q1 - IQR_FENCE * iqr;
    let upper = q.q3 + IQR_FENCE * iqr;
    let outliers = xs
        .iter()
        .copied()
        .filter(|&x| x < lower || x > upper)
        .collect();
    IqrOutliers {
        outliers,
        quartiles: q,
    }
}

// ── Per-field summary ─────────────────────────────────────────────────

/// Summary row for one numeric field. Statistics are rounded to 3 decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    /// Field name.
    pub metric: String,
    /// Number of numeric values found.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation.
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Number of IQR outliers.
    pub outliers: usize,
}

impl NumericSummary {
    /// Column labels, in display order.
    pub const COLUMNS: [&'static str; 10] = [
        "Metric", "Count", "Mean", "StdDev", "Min", "Q1", "Median", "Q3", "Max", "Outliers",
    ];

    /// Display string for one of [`Self::COLUMNS`].
    pub fn cell(&self, column: &str) -> Option<String> {
        let v = match column {
            "Metric" => return Some(self.metric.clone()),
            "Count" => return Some(self.count.to_string()),
            "Outliers" => return Some(self.outliers.to_string()),
            "Mean" => self.mean,
            "StdDev" => self.std_dev,
            "Min" => self.min,
            "Q1" => self.q1,
            "Median" => self.median,
            "Q3" => self.q3,
            "Max" => self.max,
            _ => return None,
        };
        Some(format_float(v))
    }
}

/// Summarizes one numeric column. Returns `None` when it is empty.
pub fn summarize(metric: &str, values: &[f64]) -> Option<NumericSummary> {
    if values.is_empty() {
        return None;
    }
    let s = sorted(values);
    let out = iqr_outliers(values);
    Some(NumericSummary {
        metric: metric.to_string(),
        count: values.len(),
        mean: round3(mean(values)),
        std_dev: round3(stdev_sample(values)),
        min: round3(s[0]),
        q1: round3(out.quartiles.q1),
        median: round3(out.quartiles.median),
        q3: round3(out.quartiles.q3),
        max: round3(s[s.len() - 1]),
        outliers: out.outliers.len(),
    })
}

/// Summarizes each named field across `records`, in the given order.
///
/// Fields with no numeric value in any record are left out entirely.
///
/// ```
/// use steel_insight::csv_parser::CsvParser;
/// use steel_insight::profiling::summarize_fields;
///
/// let ds = CsvParser::new().parse_str("a,b,c\n1,x,2.0\n3,y,4.0\n");
/// let rows = summarize_fields(ds.records(), &["a", "b", "c"]);
/// assert_eq!(rows.len(), 2); // b has no numeric values
/// assert_eq!(rows[0].mean, 2.0);
/// ```
pub fn summarize_fields<S: AsRef<str>>(records: &[Record], fields: &[S]) -> Vec<NumericSummary> {
    fields
        .iter()
        .filter_map(|field| {
            let field: &str = field.as_ref();
            let col = numeric_column(records, field);
            let summary = summarize(field, &col);
            if summary.is_none() {
                debug!(field, "no numeric values, skipped from summary");
            }
            summary
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Value;

    // ── Basic statistics ─────────────────────────────────────────

    #[test]
    fn mean_basic_and_empty() {
        assert_eq!(mean(&[]), 0.0);
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn median_odd_even_empty() {
        assert_eq!(median(&[]), 0.0);
        assert_eq!(median(&[1.0, 2.0, 9.0]), 2.0);
        assert_eq!(median(&[1.0, 2.0, 3.0, 10.0]), 2.5);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn stdev_small_samples() {
        assert_eq!(stdev_sample(&[]), 0.0);
        assert_eq!(stdev_sample(&[42.0]), 0.0);
    }

    #[test]
    fn stdev_identical_values_is_zero() {
        assert_eq!(stdev_sample(&[3.3, 3.3, 3.3, 3.3]), 0.0);
    }

    #[test]
    fn stdev_known_value() {
        // sample variance of 2,4,4,4,5,5,7,9 = 32/7
        let sd = stdev_sample(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert!((sd - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    // ── Quartiles ────────────────────────────────────────────────

    #[test]
    fn quartiles_even_split() {
        let q = quartiles(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(q.q1, 1.5);
        assert_eq!(q.median, 2.5);
        assert_eq!(q.q3, 3.5);
        assert_eq!(q.iqr(), 2.0);
    }

    #[test]
    fn quartiles_odd_excludes_median() {
        let q = quartiles(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(q.median, 3.0);
        assert_eq!(q.q1, 1.5);
        assert_eq!(q.q3, 4.5);
    }

    #[test]
    fn quartiles_unsorted_input() {
        let q = quartiles(&[4.0, 1.0, 3.0, 2.0]);
        assert_eq!((q.q1, q.median, q.q3), (1.5, 2.5, 3.5));
    }

    #[test]
    fn quartiles_degenerate() {
        let empty = quartiles(&[]);
        assert_eq!((empty.q1, empty.median, empty.q3), (0.0, 0.0, 0.0));

        let single = quartiles(&[8.0]);
        assert_eq!((single.q1, single.median, single.q3), (8.0, 8.0, 8.0));

        let pair = quartiles(&[2.0, 6.0]);
        assert_eq!((pair.q1, pair.median, pair.q3), (2.0, 4.0, 6.0));
    }

    // ── Outliers ─────────────────────────────────────────────────

    #[test]
    fn iqr_flags_extremes() {
        let xs = [10.0, 12.0, 11.0, 13.0, 12.0, 11.0, 50.0, -20.0];
        let out = iqr_outliers(&xs);
        assert_eq!(out.outliers, vec![50.0, -20.0]);
    }

    #[test]
    fn iqr_fence_is_inclusive() {
        // Q1 = 2, Q3 = 6, IQR = 4 → fences [-4, 12]
        let on_fence = iqr_outliers(&[0.0, 2.0, 3.0, 5.0, 6.0, 12.0]);
        assert_eq!(on_fence.fences(), (-4.0, 12.0));
        assert!(on_fence.outliers.is_empty());

        let past_fence = iqr_outliers(&[0.0, 2.0, 3.0, 5.0, 6.0, 12.5]);
        assert_eq!(past_fence.outliers, vec![12.5]);
    }

    #[test]
    fn iqr_constant_data_has_no_outliers() {
        let out = iqr_outliers(&[5.0; 6]);
        assert!(out.outliers.is_empty());
        assert_eq!(out.quartiles.iqr(), 0.0);
    }

    #[test]
    fn iqr_empty() {
        let out = iqr_outliers(&[]);
        assert!(out.outliers.is_empty());
        assert_eq!(out.quartiles.median, 0.0);
    }

    // ── Summaries ────────────────────────────────────────────────

    #[test]
    fn summarize_rounds_to_three_decimals() {
        let s = summarize("x", &[1.0, 2.0, 2.0]).expect("summary");
        assert_eq!(s.count, 3);
        assert_eq!(s.mean, 1.667);
        assert_eq!(s.std_dev, 0.577);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 2.0);
        assert_eq!(s.median, 2.0);
        assert_eq!(s.outliers, 0);
    }

    #[test]
    fn summarize_empty_is_none() {
        assert!(summarize("x", &[]).is_none());
    }

    #[test]
    fn summarize_single_value_has_zero_stdev() {
        let s = summarize("x", &[4.2]).expect("summary");
        assert_eq!(s.count, 1);
        assert_eq!(s.std_dev, 0.0);
        assert_eq!(s.mean, 4.2);
    }

    #[test]
    fn summarize_fields_order_and_skip() {
        let records: Vec<Record> = vec![
            [("a", Value::Integer(1)), ("b", Value::Text("x".into()))]
                .into_iter()
                .collect(),
            [("a", Value::Integer(3)), ("c", Value::Float(0.5))]
                .into_iter()
                .collect(),
        ];
        let rows = summarize_fields(&records, &["c", "b", "a", "missing"]);
        let names: Vec<&str> = rows.iter().map(|r| r.metric.as_str()).collect();
        assert_eq!(names, vec!["c", "a"]);
        assert_eq!(rows[0].count, 1);
        assert_eq!(rows[1].count, 2);
    }

    #[test]
    fn summary_cells() {
        let s = summarize("Hardness_HRC", &[30.0, 40.0, 50.0]).expect("summary");
        assert_eq!(s.cell("Metric").as_deref(), Some("Hardness_HRC"));
        assert_eq!(s.cell("Count").as_deref(), Some("3"));
        assert_eq!(s.cell("Mean").as_deref(), Some("40.0"));
        assert_eq!(s.cell("StdDev").as_deref(), Some("10.0"));
        assert_eq!(s.cell("Outliers").as_deref(), Some("0"));
        assert_eq!(s.cell("Nope"), None);
    }
}
