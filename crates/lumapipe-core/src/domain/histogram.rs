//! Luminance histogram computation.
//!
//! All luminance math uses ITU-R BT.601 weights with a truncating
//! (not rounding) conversion to an 8-bit bin index, matching the
//! pipeline's equalization and edge-detection stages bit for bit.

use image::{GrayImage, RgbImage};

/// Number of histogram bins (one per 8-bit intensity level).
pub const BINS: usize = 256;

/// Computes the BT.601 luma of an RGB triple, truncated to an 8-bit bin.
///
/// The weight sum is 0.9999, so the result never reaches 255 for 8-bit
/// inputs (max ≈ 254.97). The saturating cast doubles as a clamp should
/// the channel range ever widen.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn bt601_luma(r: u8, g: u8, b: u8) -> u8 {
    let luma = f64::from(r) * 0.2989 + f64::from(g) * 0.587 + f64::from(b) * 0.114;
    luma as u8
}

/// 256-bin histogram of per-pixel luminance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    bins: [u64; BINS],
    total: u64,
}

impl Default for Histogram {
    /// An all-zero histogram, the state before any raster was analyzed.
    fn default() -> Self {
        Self {
            bins: [0; BINS],
            total: 0,
        }
    }
}

impl Histogram {
    /// Compute the histogram of an RGB raster.
    ///
    /// Each pixel contributes one count to the bin of its BT.601 luma.
    /// The raster itself is not touched. Invariant:
    /// `total() == width * height`.
    #[must_use]
    pub fn from_rgb(image: &RgbImage) -> Self {
        let mut bins = [0u64; BINS];
        for pixel in image.pixels() {
            let [r, g, b] = pixel.0;
            bins[usize::from(bt601_luma(r, g, b))] += 1;
        }
        let total = bins.iter().sum();
        Self { bins, total }
    }

    /// Compute the histogram of a grayscale raster.
    ///
    /// The stored intensity channel is used as the bin index directly;
    /// no luminance formula is applied.
    #[must_use]
    pub fn from_luma(image: &GrayImage) -> Self {
        let mut bins = [0u64; BINS];
        for pixel in image.pixels() {
            bins[usize::from(pixel.0[0])] += 1;
        }
        let total = bins.iter().sum();
        Self { bins, total }
    }

    /// Build a histogram from raw bin counts.
    #[must_use]
    pub fn from_bins(bins: [u64; BINS]) -> Self {
        let total = bins.iter().sum();
        Self { bins, total }
    }

    /// Returns the total pixel count.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns the count for a single bin.
    #[must_use]
    pub fn count(&self, bin: u8) -> u64 {
        self.bins[usize::from(bin)]
    }

    /// Returns all bin counts in intensity order.
    #[must_use]
    pub const fn bins(&self) -> &[u64; BINS] {
        &self.bins
    }

    /// Calculate mean luminance.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let sum: u64 = self
            .bins
            .iter()
            .enumerate()
            .map(|(i, &count)| (i as u64) * count)
            .sum();
        sum as f64 / self.total as f64
    }

    /// Returns the bin with the highest count and that count.
    ///
    /// Ties resolve to the lowest bin.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn peak(&self) -> (u8, u64) {
        let mut peak_bin = 0usize;
        let mut peak_count = self.bins[0];
        for (i, &count) in self.bins.iter().enumerate() {
            if count > peak_count {
                peak_bin = i;
                peak_count = count;
            }
        }
        (peak_bin as u8, peak_count)
    }
}
