//! Histogram command - inspect a persisted histogram CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use lumapipe_adapters::histogram_csv;
use lumapipe_core::HistogramSummary;

/// Arguments for histogram inspection.
#[derive(Args, Clone)]
pub struct HistogramArgs {
    /// Histogram CSV file to inspect
    pub file: PathBuf,

    /// Pretty-print the JSON summary
    #[arg(long)]
    pub pretty: bool,
}

/// Run the histogram command: import the CSV and print its summary.
pub fn run(args: &HistogramArgs) -> Result<()> {
    let histogram = histogram_csv::import(&args.file)
        .with_context(|| format!("Failed to import histogram from {}", args.file.display()))?;

    let summary = HistogramSummary::of(&histogram);
    let json = if args.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{json}");
    Ok(())
}
