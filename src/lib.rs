//! # steel-insight
//!
//! Descriptive statistics, correlation and regression over steel-sample
//! measurements, rendered as a fixed-width text report.
//!
//! Data flows one way: delimited text → typed records → numeric columns →
//! statistics, and records → rankings → tables → report. Dirty data never
//! aborts a run. Malformed numbers stay text, short rows lose trailing
//! fields, and empty or constant columns get defined zero statistics.
//!
//! ## Modules
//!
//! - [`dataset`] — Value / Record / Dataset model and numeric column extraction
//! - [`csv_parser`] — Delimited-text parsing with per-cell type coercion
//! - [`profiling`] — Mean, sample std dev, Tukey-hinge quartiles, IQR outliers, field summaries
//! - [`analysis`] — Pearson correlation and simple OLS regression
//! - [`ranking`] — Top-k records by a numeric field
//! - [`table`] — Fixed-width table rendering
//! - [`report`] — Four-section steel analytics report
//! - [`error`] — Error types
//!
//! ## Quick Start
//!
//! ```
//! use steel_insight::csv_parser::CsvParser;
//! use steel_insight::report::{analyze, Report, ReportConfig};
//!
//! let csv = "SampleID,Carbon_pct,Hardness_HRC\nA,0.2,30\nB,0.4,40\nC,0.6,50\n";
//! let ds = CsvParser::new().parse_str(csv);
//! assert_eq!(ds.len(), 3);
//!
//! let config = ReportConfig::default();
//! let analysis = analyze(ds.records(), &config);
//! let report = Report::assemble("samples.csv", ds.len(), &analysis, &config);
//! assert!(report.render().starts_with("STEEL PROPERTY EXPLORER"));
//! ```

pub mod analysis;
pub mod csv_parser;
pub mod dataset;
pub mod error;
pub mod profiling;
pub mod ranking;
pub mod report;
pub mod table;

pub use error::InsightError;
