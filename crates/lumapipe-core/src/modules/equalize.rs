//! Histogram equalization.
//!
//! Builds a 256-entry lookup table from the cumulative histogram and
//! remaps every pixel through it. Output is always grayscale: the
//! pipeline is luminance-centric by contract, and equalization replaces
//! each pixel with the remapped luma on all three channels rather than
//! preserving hue.

use image::{Rgb, RgbImage};

use crate::domain::{bt601_luma, EqualizeError, Histogram, BINS};

/// Intensity lookup table derived from a histogram.
///
/// Entries are non-decreasing in the input bin. Built fresh for each
/// equalization pass and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut([u8; BINS]);

impl Lut {
    /// Builds the equalization LUT for a raster of `pixel_count` pixels.
    ///
    /// `lut[k] = floor(255/n * cumsum(h, k))` with a truncating cast;
    /// truncation, not rounding, is part of the output contract. The
    /// cumulative sum is inherently sequential.
    ///
    /// # Errors
    ///
    /// [`EqualizeError::EmptyRaster`] when `pixel_count` is zero;
    /// [`EqualizeError::DimensionMismatch`] when the histogram total
    /// disagrees with `pixel_count` (a stale histogram).
    pub fn build(histogram: &Histogram, pixel_count: u64) -> Result<Self, EqualizeError> {
        if pixel_count == 0 {
            return Err(EqualizeError::EmptyRaster);
        }
        if histogram.total() != pixel_count {
            return Err(EqualizeError::DimensionMismatch {
                histogram_total: histogram.total(),
                raster_pixels: pixel_count,
            });
        }

        #[allow(clippy::cast_precision_loss)]
        let coef = 255.0 / pixel_count as f64;
        let mut lut = [0u8; BINS];
        let mut sum = 0u64;
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        for (entry, &count) in lut.iter_mut().zip(histogram.bins().iter()) {
            sum += count;
            *entry = (coef * sum as f64) as u8;
        }
        Ok(Self(lut))
    }

    /// Maps an input intensity through the table.
    #[must_use]
    pub fn map(&self, luma: u8) -> u8 {
        self.0[usize::from(luma)]
    }

    /// Returns the raw table.
    #[must_use]
    pub const fn entries(&self) -> &[u8; BINS] {
        &self.0
    }
}

/// Equalizes the raster's contrast in place.
///
/// Recomputes the BT.601 luma of every pixel from its current RGB
/// (never trusting the histogram as a per-pixel cache) and writes the
/// remapped value to all three channels.
///
/// # Errors
///
/// See [`Lut::build`].
pub fn equalize(image: &mut RgbImage, histogram: &Histogram) -> Result<(), EqualizeError> {
    let (w, h) = image.dimensions();
    let lut = Lut::build(histogram, u64::from(w) * u64::from(h))?;

    for pixel in image.pixels_mut() {
        let [r, g, b] = pixel.0;
        let mapped = lut.map(bt601_luma(r, g, b));
        *pixel = Rgb([mapped, mapped, mapped]);
    }
    Ok(())
}
