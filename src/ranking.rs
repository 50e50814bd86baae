//! Top-k record selection by a numeric field.
//!
//! ```
//! use steel_insight::csv_parser::CsvParser;
//! use steel_insight::ranking::{top_k, SortOrder};
//!
//! let ds = CsvParser::new().parse_str("id,uts\nA,900\nB,n/a\nC,1200\nD,1050\n");
//! let best = top_k(ds.records(), "uts", 2, SortOrder::Descending);
//! let ids: Vec<String> = best.iter().map(|r| r.get("id").unwrap().to_string()).collect();
//! assert_eq!(ids, vec!["C", "D"]);
//! ```

use crate::dataset::Record;

/// Ordering applied by [`top_k`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Largest values first.
    #[default]
    Descending,
    /// Smallest values first.
    Ascending,
}

/// Selects up to `k` records ranked by the numeric value of `field`.
///
/// Records whose `field` is absent or non-numeric are excluded. The sort is
/// stable, so records with equal values keep their input order. Fewer than
/// `k` qualifying records returns all of them.
pub fn top_k<'a>(records: &'a [Record], field: &str, k: usize, order: SortOrder) -> Vec<&'a Record> {
    // -0.0 and 0.0 compare equal; fold them so the stable sort keeps input order
    let mut keyed: Vec<(f64, &Record)> = records
        .iter()
        .filter_map(|r| r.numeric(field).map(|v| (if v == 0.0 { 0.0 } else { v }, r)))
        .collect();

    match order {
        SortOrder::Descending => keyed.sort_by(|a, b| b.0.total_cmp(&a.0)),
        SortOrder::Ascending => keyed.sort_by(|a, b| a.0.total_cmp(&b.0)),
    }

    keyed.into_iter().take(k).map(|(_, r)| r).collect()
}
