//! steel-insight command-line entry point.
//!
//! Reads a steel-sample CSV, prints the analytics report to stdout and
//! saves it to a file.

use anyhow::{bail, Context};
use clap::Parser;
use std::path::PathBuf;
use steel_insight::report::{generate_report, ReportConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "steel-insight")]
#[command(version, about = "Summary statistics, correlation and top samples for steel CSV data")]
struct Args {
    /// Input CSV file
    #[arg(default_value = "steel_samples.csv")]
    input: PathBuf,

    /// File the report is saved to (overwritten)
    #[arg(short, long, default_value = "report.txt")]
    output: PathBuf,

    /// Rows in each top-samples table
    #[arg(short = 'k', long = "top", default_value_t = 5)]
    top: usize,

    /// Field delimiter (single ASCII character)
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Print the report without saving it
    #[arg(long)]
    no_save: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // Logs go to stderr; stdout carries only the report.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !args.delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got {:?}", args.delimiter);
    }

    let config = ReportConfig::default()
        .top_k(args.top)
        .delimiter(args.delimiter as u8);

    tracing::info!("Analyzing {}", args.input.display());
    let report = generate_report(&args.input, &config)
        .with_context(|| format!("could not build report for {}", args.input.display()))?;

    println!("{}", report.render());

    if !args.no_save {
        report.save(&args.output)?;
        tracing::info!("Report saved to {}", args.output.display());
    }

    Ok(())
}
