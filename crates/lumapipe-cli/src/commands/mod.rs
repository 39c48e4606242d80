//! CLI command definitions and handlers.

pub mod histogram;
pub mod process;

use clap::{Parser, Subcommand};

/// Lumapipe - Luminance histogram and edge transform pipeline
#[derive(Parser)]
#[command(name = "lumapipe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared process arguments (paths, operations, flags).
    #[command(flatten)]
    pub process: process::ProcessArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Transform rasters through the pipeline
    Process(process::ProcessArgs),
    /// Inspect a persisted histogram CSV
    Histogram(histogram::HistogramArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every raster was transformed and written.
    Success,
    /// Some rasters were skipped (decode or transform failures).
    PartialFailure,
    /// Fatal error before or during the run.
    Error,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        match code {
            ExitCode::Success => Self::from(0),
            ExitCode::PartialFailure => Self::from(1),
            ExitCode::Error => Self::from(2),
        }
    }
}
