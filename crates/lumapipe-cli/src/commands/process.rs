//! Process command - transform rasters through the pipeline.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use lumapipe_adapters::{histogram_csv, save_raster, FsRasterSource};
use lumapipe_core::{HistogramSummary, Op, RasterSource, Session, TransformReport};
use tracing::{debug, info, warn};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, ProgressBar};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one JSON object per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
}

/// A pipeline operation as named on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OpArg {
    /// Fast library grayscale conversion
    Grayscale,
    /// BT.601 luminance grayscale (recomputes the histogram)
    GrayscaleLuminance,
    /// Histogram contrast equalization
    Equalize,
    /// Sobel edge detection
    Edges,
}

impl From<OpArg> for Op {
    fn from(arg: OpArg) -> Self {
        match arg {
            OpArg::Grayscale => Self::Grayscale,
            OpArg::GrayscaleLuminance => Self::GrayscaleLuminance,
            OpArg::Equalize => Self::Equalize,
            OpArg::Edges => Self::Edges,
        }
    }
}

/// File name suffix for the transformed output, after the last
/// operation applied.
const fn op_suffix(op: Op) -> &'static str {
    match op {
        Op::Grayscale => "grayscale",
        Op::GrayscaleLuminance => "grayscale_luminance",
        Op::Equalize => "equalize",
        _ => "edges",
    }
}

/// Shared arguments for raster processing.
#[derive(Args, Clone)]
pub struct ProcessArgs {
    /// Files or directories to process
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Operation to apply, in order (repeatable)
    #[arg(long = "op", value_enum, value_name = "OP")]
    pub ops: Vec<OpArg>,

    /// Directory for transformed rasters (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Export the final histogram as CSV to FILE
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "histogram.csv")]
    pub histogram: Option<PathBuf>,

    /// Equalize against a previously exported histogram CSV
    #[arg(long, value_name = "FILE")]
    pub from_histogram: Option<PathBuf>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Report format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,
}

impl ProcessArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded defaults (in accessor methods)
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        // Recursive: config applies only if CLI --recursive not passed
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        // Report format: CLI > config (accessor provides fallback)
        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "json" => Some(OutputFormat::Json),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    _ => None,
                });
        }

        // Boolean output options: CLI flag wins, then config
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        // Output directory: CLI > config
        if args.output.is_none() {
            args.output.clone_from(&config.output.dir);
        }

        // Histogram export: config can turn it on when the CLI flag
        // was not passed
        if args.histogram.is_none() && config.histogram.export.unwrap_or(false) {
            args.histogram = Some(
                config
                    .histogram
                    .file
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("histogram.csv")),
            );
        }

        args
    }

    /// Operations in application order, as core ops.
    fn ops(&self) -> Vec<Op> {
        self.ops.iter().map(|&arg| Op::from(arg)).collect()
    }

    /// Get report format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Jsonl)
    }
}

/// Result of running the process command.
#[allow(dead_code)] // Fields exposed for programmatic use
pub struct ProcessResult {
    /// Number of rasters transformed and written.
    pub processed: usize,
    /// Number of rasters skipped.
    pub skipped: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the process command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &ProcessArgs) -> Result<ProcessResult> {
    info!("Running process command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    let ops = args.ops();
    if ops.is_empty() {
        anyhow::bail!("No operations specified; pass --op at least once");
    }

    // Initialize raster source
    let source = FsRasterSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    // Determine if we should show progress
    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());

    // Initialize progress bar
    #[allow(clippy::cast_possible_truncation)]
    let progress = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    // Initialize report output
    let output = JsonOutput::stdout();

    // Import a persisted histogram for equalization, if requested. A
    // broken file falls back to the computed histogram.
    let imported = args.from_histogram.as_ref().and_then(|path| {
        match histogram_csv::import(path) {
            Ok(h) => {
                debug!("Imported histogram from {}", path.display());
                Some(h)
            }
            Err(e) => {
                warn!(
                    "Ignoring histogram file {}: {e}; using computed histogram",
                    path.display()
                );
                None
            }
        }
    });

    process_rasters(&source, &ops, imported.as_ref(), &output, &progress, args)
}

/// Transform rasters and write outputs and reports.
#[allow(clippy::too_many_lines)]
fn process_rasters(
    source: &FsRasterSource,
    ops: &[Op],
    imported: Option<&lumapipe_core::Histogram>,
    output: &JsonOutput,
    progress: &ProgressBar,
    args: &ProcessArgs,
) -> Result<ProcessResult> {
    let total = source.count_hint();
    let multiple = total.is_some_and(|t| t > 1);
    let suffix = ops.last().map_or("processed", |&op| op_suffix(op));

    let out_dir = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)?;

    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut all_reports: Vec<TransformReport> = Vec::new();

    for (index, raster_result) in source.rasters().enumerate() {
        let raster = match raster_result {
            Ok(r) => r,
            Err(e) => {
                // Note: error message contains the path via anyhow context
                progress.skipped(&format!("raster {index}"), &e.to_string());
                skipped += 1;
                continue;
            }
        };

        let path = raster.path.clone();
        let name = raster.name().to_string();

        progress.started(&path, index, total);

        let mut session = Session::new(raster.image);
        if let Some(histogram) = imported {
            session.set_histogram(histogram.clone());
        }

        let mut failed = false;
        for &op in ops {
            if let Err(e) = session.apply(op) {
                warn!("Transform {op:?} failed for {path}: {e}");
                failed = true;
                break;
            }
        }
        if failed {
            progress.skipped(&path, "transform failed");
            skipped += 1;
            continue;
        }

        let out_path = out_dir.join(format!("{name}_{suffix}.png"));
        save_raster(session.raster(), &out_path)?;

        if let Some(csv_path) = &args.histogram {
            let target = if multiple {
                // One CSV per raster when processing a batch.
                let base = csv_path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .unwrap_or("histogram.csv");
                csv_path.with_file_name(format!("{name}_{base}"))
            } else {
                csv_path.clone()
            };
            histogram_csv::export(session.histogram(), &name, &target)?;
        }

        let report = TransformReport {
            path,
            timestamp: iso_timestamp(),
            dimensions: session.dimensions(),
            ops: session.applied().to_vec(),
            histogram: HistogramSummary::of(session.histogram()),
        };

        progress.completed(&report);

        // Output based on format
        match args.format() {
            OutputFormat::Jsonl => {
                output.write(&report)?;
            }
            OutputFormat::Json => {
                all_reports.push(report);
            }
        }

        processed += 1;
    }

    // For JSON format, output all reports as one array
    if matches!(args.format(), OutputFormat::Json) {
        output.write_array(&all_reports, args.pretty)?;
    }

    output.flush()?;

    progress.finished(processed, skipped);

    let exit_code = if skipped > 0 {
        ExitCode::PartialFailure
    } else {
        ExitCode::Success
    };

    Ok(ProcessResult {
        processed,
        skipped,
        exit_code,
    })
}

/// Generate ISO 8601 UTC timestamp (RFC 3339 format).
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}
