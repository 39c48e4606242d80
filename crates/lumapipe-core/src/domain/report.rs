//! Transform report types.

use serde::{Deserialize, Serialize};

use super::{Histogram, RasterDimensions};

/// A transform operation applied to the working raster.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Op {
    /// Fast library-driven grayscale conversion; histogram untouched.
    Grayscale,
    /// BT.601 luminance grayscale; recomputes the histogram in-pass.
    GrayscaleLuminance,
    /// Histogram equalization; flattens to gray.
    Equalize,
    /// Sobel edge detection (equalizes internally first).
    Edges,
}

/// Complete record of one processing run over a single raster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformReport {
    /// Path of the source raster.
    pub path: String,
    /// Timestamp of processing (ISO 8601).
    pub timestamp: String,
    /// Dimensions of the raster.
    pub dimensions: RasterDimensions,
    /// Operations applied, in order.
    pub ops: Vec<Op>,
    /// Summary of the histogram as of the end of the run.
    pub histogram: HistogramSummary,
}

/// Compact histogram statistics for reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistogramSummary {
    /// Total pixel count (sum of all bins).
    pub total: u64,
    /// Mean luminance.
    pub mean: f64,
    /// Bin with the highest count.
    pub peak_bin: u8,
    /// Count in the peak bin.
    pub peak_count: u64,
}

impl HistogramSummary {
    /// Summarizes a histogram.
    #[must_use]
    pub fn of(histogram: &Histogram) -> Self {
        let (peak_bin, peak_count) = histogram.peak();
        Self {
            total: histogram.total(),
            mean: histogram.mean(),
            peak_bin,
            peak_count,
        }
    }
}
