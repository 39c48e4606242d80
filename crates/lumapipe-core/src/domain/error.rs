//! Typed errors for the transform pipeline.

use thiserror::Error;

/// Errors raised while building or applying an equalization LUT.
///
/// Edge detection equalizes internally, so it surfaces the same set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EqualizeError {
    /// The raster has zero pixels; the LUT coefficient 255/n would be
    /// undefined.
    #[error("cannot equalize an empty raster")]
    EmptyRaster,

    /// The histogram was computed from a raster of a different size.
    #[error("histogram covers {histogram_total} pixels but raster has {raster_pixels}")]
    DimensionMismatch {
        /// Pixel count recorded in the histogram.
        histogram_total: u64,
        /// Pixel count of the raster being equalized.
        raster_pixels: u64,
    },
}
