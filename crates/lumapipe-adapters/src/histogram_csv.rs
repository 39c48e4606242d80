//! Histogram CSV persistence.
//!
//! The on-disk format is positional and exactly three lines:
//!
//! 1. an identifying label (image name), informational only;
//! 2. the 256 bin indices `0,1,...,255,` (trailing comma included);
//! 3. the 256 bin counts in the same order, trailing commas tolerated.
//!
//! Lines 1 and 2 are never parsed back; import reads line 3 only. An
//! import either fills all bins it names or fails as a whole; there is
//! no partial fill. The caller decides the fallback policy on failure.

use std::io;
use std::num::ParseIntError;
use std::path::Path;

use lumapipe_core::{Histogram, BINS};
use thiserror::Error;
use tracing::debug;

/// Errors raised while importing a histogram CSV.
#[derive(Debug, Error)]
pub enum HistogramCsvError {
    /// The file does not exist.
    #[error("histogram file not found: {0}")]
    FileMissing(String),

    /// The file could not be read.
    #[error("failed to read histogram file: {0}")]
    Io(#[from] io::Error),

    /// The file has fewer than three lines.
    #[error("histogram file truncated: no counts line")]
    Truncated,

    /// A count token failed to parse; the import is aborted whole.
    #[error("bad count {token:?} at bin {bin}")]
    Parse {
        /// Zero-based bin index of the offending token.
        bin: usize,
        /// The token as found in the file.
        token: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },

    /// More count tokens than bins.
    #[error("too many counts: {count} tokens for {BINS} bins")]
    ExcessCounts {
        /// Number of numeric tokens found.
        count: usize,
    },
}

/// Writes a histogram to the 3-line CSV format.
///
/// The target is overwritten completely; a failed write leaves no
/// guarantee about partial content and is retried by re-exporting.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn export(histogram: &Histogram, label: &str, path: &Path) -> io::Result<()> {
    let mut out = String::with_capacity(BINS * 8);
    out.push_str(label);
    out.push('\n');
    for bin in 0..BINS {
        out.push_str(&bin.to_string());
        out.push(',');
    }
    out.push('\n');
    for &count in histogram.bins() {
        out.push_str(&count.to_string());
        out.push(',');
    }
    std::fs::write(path, out)?;
    debug!("Exported histogram for {label:?} to {}", path.display());
    Ok(())
}

/// Reads a histogram back from the 3-line CSV format.
///
/// Skips the label and bin-index lines, then parses every count token
/// on line 3. Bins beyond the last token keep their zero default
/// (matching files written before the format grew to 256 bins).
///
/// # Errors
///
/// See [`HistogramCsvError`]; any bad token aborts the whole import.
pub fn import(path: &Path) -> Result<Histogram, HistogramCsvError> {
    let text = match std::fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(HistogramCsvError::FileMissing(
                path.to_string_lossy().into_owned(),
            ));
        }
        Err(e) => return Err(e.into()),
    };

    let counts_line = text.lines().nth(2).ok_or(HistogramCsvError::Truncated)?;
    // Trailing commas carry no tokens and are dropped, however many;
    // interior empty tokens remain parse errors.
    let counts_line = counts_line.trim_end_matches(',');

    let mut bins = [0u64; BINS];
    for (bin, token) in counts_line.split(',').enumerate() {
        if bin >= BINS {
            return Err(HistogramCsvError::ExcessCounts {
                count: counts_line.split(',').count(),
            });
        }
        bins[bin] = token
            .trim()
            .parse()
            .map_err(|source| HistogramCsvError::Parse {
                bin,
                token: token.to_string(),
                source,
            })?;
    }

    Ok(Histogram::from_bins(bins))
}
