//! Grayscale conversion.
//!
//! Two deliberately distinct strategies:
//!
//! - [`device_grayscale`] delegates to the image library's own color
//!   model and leaves histogram analysis to the caller.
//! - [`luminance_grayscale`] applies the pipeline's BT.601 luma formula
//!   and fills the histogram in the same pass.
//!
//! The two produce visibly different results and are not
//! interchangeable.

use image::{DynamicImage, GrayImage, Luma, RgbImage};

use crate::domain::{bt601_luma, Histogram};

/// Fast grayscale conversion using the library's luminance formula.
///
/// Does not compute a histogram; callers that need one run
/// [`Histogram::from_luma`] separately.
#[must_use]
pub fn device_grayscale(image: &DynamicImage) -> GrayImage {
    image.to_luma8()
}

/// Explicit BT.601 luminance grayscale conversion.
///
/// Produces a new single-channel raster of identical dimensions and
/// the luminance histogram accumulated from the same pass. Intensity
/// values are unsigned throughout; no signed reinterpretation occurs
/// anywhere downstream.
#[must_use]
pub fn luminance_grayscale(image: &RgbImage) -> (GrayImage, Histogram) {
    let (w, h) = image.dimensions();
    let mut gray = GrayImage::new(w, h);
    let mut bins = [0u64; crate::domain::BINS];

    for (x, y, pixel) in image.enumerate_pixels() {
        let [r, g, b] = pixel.0;
        let luma = bt601_luma(r, g, b);
        bins[usize::from(luma)] += 1;
        gray.put_pixel(x, y, Luma([luma]));
    }

    (gray, Histogram::from_bins(bins))
}
