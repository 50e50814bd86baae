//! Steel-sample analytics report.
//!
//! [`analyze`] computes the numbers; [`Report::assemble`] lays them out as
//! four fixed sections:
//!
//! 1. Summary statistics over the configured numeric fields
//! 2. Pearson r and OLS fit of `Hardness_HRC` on `Carbon_pct`
//! 3. Top samples by `Hardness_HRC`
//! 4. Top samples by `UTS_MPa`
//!
//! Fields, regression pair and ranking sections come from [`ReportConfig`];
//! the list above is its default.
//!
//! ```
//! use steel_insight::csv_parser::CsvParser;
//! use steel_insight::report::{analyze, Report, ReportConfig};
//!
//! let csv = "SampleID,Carbon_pct,Hardness_HRC\nA,0.2,30\nB,0.4,40\nC,0.6,50\n";
//! let ds = CsvParser::new().parse_str(csv);
//! let config = ReportConfig::default();
//! let analysis = analyze(ds.records(), &config);
//! assert!((analysis.regression.slope - 50.0).abs() < 1e-9);
//!
//! let report = Report::assemble("inline.csv", ds.len(), &analysis, &config);
//! assert!(report.render().contains("(R^2 = 1.0)"));
//! ```

use crate::analysis::{linear_regression, pearson_corr, RegressionResult};
use crate::csv_parser::CsvParser;
use crate::dataset::{format_float, numeric_column, round3, Record};
use crate::error::InsightError;
use crate::profiling::{summarize_fields, NumericSummary};
use crate::ranking::{top_k, SortOrder};
use crate::table::render_table;
use std::path::Path;
use tracing::debug;

/// Numeric fields summarized by default, in report order.
pub const STEEL_NUMERIC_FIELDS: [&str; 10] = [
    "Carbon_pct",
    "Manganese_pct",
    "Silicon_pct",
    "QuenchTemp_C",
    "TemperTemp_C",
    "TemperTime_min",
    "Hardness_HRC",
    "UTS_MPa",
    "Yield_MPa",
    "Elongation_pct",
];

/// Default regression predictor.
pub const PREDICTOR: &str = "Carbon_pct";
/// Default regression response; also the first ranking key.
pub const HARDNESS: &str = "Hardness_HRC";
/// Second ranking key.
pub const UTS: &str = "UTS_MPa";

/// Columns shown for the hardness ranking.
pub const HARDNESS_COLUMNS: [&str; 6] = [
    "SampleID",
    "Carbon_pct",
    "QuenchTemp_C",
    "TemperTemp_C",
    "TemperTime_min",
    "Hardness_HRC",
];

/// Columns shown for the tensile-strength ranking.
pub const UTS_COLUMNS: [&str; 6] = [
    "SampleID",
    "Carbon_pct",
    "Hardness_HRC",
    "UTS_MPa",
    "Yield_MPa",
    "Elongation_pct",
];

const TITLE: &str = "STEEL PROPERTY EXPLORER — ANALYTICS REPORT";
const RULE_WIDTH: usize = 66;

// ── Configuration ─────────────────────────────────────────────────────

/// One top-k table: which field ranks the records and what is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingSection {
    /// Numeric field the records are ranked by.
    pub field: String,
    /// Heading suffix, as in `TOP-5 SAMPLES BY <label>`.
    pub label: String,
    /// Columns displayed for each selected record.
    pub columns: Vec<String>,
    pub order: SortOrder,
}

impl RankingSection {
    /// Descending ranking by `field`.
    pub fn new<S: Into<String>>(
        field: impl Into<String>,
        label: impl Into<String>,
        columns: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            field: field.into(),
            label: label.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            order: SortOrder::Descending,
        }
    }

    /// Sets the sort order.
    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}

/// Report settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Fields for the summary table. Default: [`STEEL_NUMERIC_FIELDS`].
    pub summary_fields: Vec<String>,
    /// Regression predictor (x). Default: [`PREDICTOR`].
    pub predictor: String,
    /// Regression response (y). Default: [`HARDNESS`].
    pub response: String,
    /// Rows per ranking table. Default: 5.
    pub top_k: usize,
    /// Ranking tables, in report order. Default: hardness, then UTS.
    pub rankings: Vec<RankingSection>,
    /// Input field delimiter. Default: `,`.
    pub delimiter: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            summary_fields: STEEL_NUMERIC_FIELDS.iter().map(|s| s.to_string()).collect(),
            predictor: PREDICTOR.to_string(),
            response: HARDNESS.to_string(),
            top_k: 5,
            rankings: vec![
                RankingSection::new(HARDNESS, "HARDNESS (HRC)", HARDNESS_COLUMNS),
                RankingSection::new(UTS, "UTS (MPa)", UTS_COLUMNS),
            ],
            delimiter: b',',
        }
    }
}

impl ReportConfig {
    /// Sets the ranking size.
    pub fn top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Sets the input delimiter.
    pub fn delimiter(mut self, delim: u8) -> Self {
        self.delimiter = delim;
        self
    }

    /// Sets the regression predictor and response fields.
    pub fn regression(mut self, predictor: impl Into<String>, response: impl Into<String>) -> Self {
        self.predictor = predictor.into();
        self.response = response.into();
        self
    }

    /// Replaces the ranking sections.
    pub fn rankings(mut self, rankings: impl IntoIterator<Item = RankingSection>) -> Self {
        self.rankings = rankings.into_iter().collect();
        self
    }

    /// Replaces the summary field list.
    pub fn summary_fields<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.summary_fields = fields.into_iter().map(Into::into).collect();
        self
    }
}

// ── Analysis ──────────────────────────────────────────────────────────

/// Everything the report shows, before formatting.
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    /// One row per summary field that had numeric data.
    pub summary: Vec<NumericSummary>,
    /// Pearson r of response on predictor.
    pub correlation: f64,
    /// OLS fit of response on predictor.
    pub regression: RegressionResult,
    /// Selected records, one list per configured ranking section.
    pub rankings: Vec<Vec<&'a Record>>,
}

/// Runs every statistic over the parsed records.
pub fn analyze<'a>(records: &'a [Record], config: &ReportConfig) -> Analysis<'a> {
    let summary = summarize_fields(records, config.summary_fields.as_slice());

    let x = numeric_column(records, &config.predictor);
    let y = numeric_column(records, &config.response);
    if x.len() != y.len() {
        debug!(
            predictor = x.len(),
            response = y.len(),
            "column lengths differ, pairing truncated to the shorter"
        );
    }

    let rankings = config
        .rankings
        .iter()
        .map(|section| top_k(records, &section.field, config.top_k, section.order))
        .collect();

    Analysis {
        summary,
        correlation: pearson_corr(&x, &y),
        regression: linear_regression(&x, &y),
        rankings,
    }
}

// ── Report ────────────────────────────────────────────────────────────

/// Assembled report: ordered text sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    sections: Vec<String>,
}

impl Report {
    /// Formats an analysis into report sections.
    ///
    /// `input` is the label printed as the input file; `sample_count` is the
    /// number of parsed records.
    pub fn assemble(
        input: &str,
        sample_count: usize,
        analysis: &Analysis<'_>,
        config: &ReportConfig,
    ) -> Self {
        let k = config.top_k;

        let mut sections = vec![
            lines(&[
                TITLE.to_string(),
                "=".repeat(RULE_WIDTH),
                format!("Input file: {input}"),
                format!("Total samples: {sample_count}"),
                String::new(),
            ]),
            lines(&[
                "[1] SUMMARY STATISTICS".to_string(),
                render_table(&analysis.summary, &NumericSummary::COLUMNS),
                String::new(),
            ]),
            regression_section(analysis, config),
        ];

        for (i, (section, top)) in config.rankings.iter().zip(&analysis.rankings).enumerate() {
            sections.push(lines(&[
                format!("[{}] TOP-{k} SAMPLES BY {}", i + 3, section.label),
                render_table(top, &section.columns),
                String::new(),
            ]));
        }
        sections.push("End of report.".to_string());

        Self { sections }
    }

    /// Sections in order.
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Full report text, without a trailing newline.
    pub fn render(&self) -> String {
        self.sections.join("\n")
    }

    /// Writes the report to `path`, replacing any existing content.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), InsightError> {
        let path = path.as_ref();
        std::fs::write(path, self.render()).map_err(|source| InsightError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Reads `path`, analyzes it and assembles the report.
pub fn generate_report(path: impl AsRef<Path>, config: &ReportConfig) -> Result<Report, InsightError> {
    let path = path.as_ref();
    let dataset = CsvParser::new()
        .delimiter(config.delimiter)
        .parse_file(path)?;
    let analysis = analyze(dataset.records(), config);
    debug!(
        samples = dataset.len(),
        summarized = analysis.summary.len(),
        "analysis complete"
    );
    Ok(Report::assemble(
        &path.display().to_string(),
        dataset.len(),
        &analysis,
        config,
    ))
}

fn regression_section(analysis: &Analysis<'_>, config: &ReportConfig) -> String {
    let fit = &analysis.regression;
    let (r, slope, intercept, r2) = (
        fmt3(analysis.correlation),
        fmt3(fit.slope),
        fmt3(fit.intercept),
        fmt3(fit.r_squared),
    );
    let (x, y) = (config.predictor.as_str(), config.response.as_str());

    if x == PREDICTOR && y == HARDNESS {
        return lines(&[
            "[2] CORRELATION & REGRESSION (Hardness vs Carbon)".to_string(),
            format!("Pearson correlation (Carbon% vs Hardness HRC): {r}"),
            format!("Linear regression  Hardness ≈ {slope} * Carbon_pct + {intercept}   (R^2 = {r2})"),
            "Note: Positive slope indicates higher carbon tends to increase hardness.".to_string(),
            String::new(),
        ]);
    }
    lines(&[
        format!("[2] CORRELATION & REGRESSION ({y} vs {x})"),
        format!("Pearson correlation ({x} vs {y}): {r}"),
        format!("Linear regression  {y} ≈ {slope} * {x} + {intercept}   (R^2 = {r2})"),
        String::new(),
    ])
}

fn lines(parts: &[String]) -> String {
    parts.join("\n")
}

fn fmt3(v: f64) -> String {
    format_float(round3(v))
}
