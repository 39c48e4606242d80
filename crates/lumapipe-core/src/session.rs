//! Processing session: one raster, one histogram, threaded explicitly.
//!
//! The session owns the working raster and the last computed histogram
//! and passes them into each transform as values. There is no shared
//! mutable state behind the operations; staleness is visible in the
//! API. The histogram is recomputed on load and by the luminance
//! grayscale pass, and goes stale after any other pixel mutation until
//! [`Session::recompute_histogram`] runs, the same contract the
//! equalize and edge-detect stages document.

use image::DynamicImage;

use crate::domain::{EqualizeError, Histogram, Op, RasterDimensions};
use crate::modules::{detect_edges, device_grayscale, equalize, luminance_grayscale};

/// A single-raster processing session.
#[derive(Debug, Clone)]
pub struct Session {
    raster: DynamicImage,
    histogram: Histogram,
    applied: Vec<Op>,
}

impl Session {
    /// Starts a session over a decoded raster, computing its histogram.
    #[must_use]
    pub fn new(raster: DynamicImage) -> Self {
        let histogram = Histogram::from_rgb(&raster.to_rgb8());
        Self {
            raster,
            histogram,
            applied: Vec::new(),
        }
    }

    /// The current working raster.
    #[must_use]
    pub const fn raster(&self) -> &DynamicImage {
        &self.raster
    }

    /// The last computed histogram. May be stale; see module docs.
    #[must_use]
    pub const fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// Dimensions of the working raster.
    #[must_use]
    pub fn dimensions(&self) -> RasterDimensions {
        let (w, h) = (self.raster.width(), self.raster.height());
        RasterDimensions::new(w, h)
    }

    /// Operations applied so far, in order.
    #[must_use]
    pub fn applied(&self) -> &[Op] {
        &self.applied
    }

    /// Recomputes the histogram from the current raster.
    pub fn recompute_histogram(&mut self) {
        self.histogram = Histogram::from_rgb(&self.raster.to_rgb8());
    }

    /// Replaces the working histogram, e.g. with one restored from
    /// persistence. The size check in [`Session::equalize`] still
    /// applies, so a histogram from a different raster is rejected at
    /// use, not here.
    pub fn set_histogram(&mut self, histogram: Histogram) {
        self.histogram = histogram;
    }

    /// Applies one transform operation.
    ///
    /// # Errors
    ///
    /// [`EqualizeError`] from the equalize and edge-detect paths.
    pub fn apply(&mut self, op: Op) -> Result<(), EqualizeError> {
        match op {
            Op::Grayscale => self.grayscale_device(),
            Op::GrayscaleLuminance => self.grayscale_luminance(),
            Op::Equalize => self.equalize()?,
            Op::Edges => self.detect_edges()?,
        }
        Ok(())
    }

    /// Fast library grayscale. The histogram is left untouched and is
    /// stale afterwards; callers that need analysis recompute it.
    pub fn grayscale_device(&mut self) {
        let gray = device_grayscale(&self.raster);
        self.raster = DynamicImage::ImageLuma8(gray);
        self.applied.push(Op::Grayscale);
    }

    /// BT.601 luminance grayscale; replaces both the raster and the
    /// histogram in one pass.
    pub fn grayscale_luminance(&mut self) {
        let (gray, histogram) = luminance_grayscale(&self.raster.to_rgb8());
        self.raster = DynamicImage::ImageLuma8(gray);
        self.histogram = histogram;
        self.applied.push(Op::GrayscaleLuminance);
    }

    /// Equalizes contrast using the last computed histogram. The
    /// histogram is not refreshed afterwards.
    ///
    /// # Errors
    ///
    /// [`EqualizeError`] when the raster is empty or the histogram is
    /// from a raster of different size.
    pub fn equalize(&mut self) -> Result<(), EqualizeError> {
        let mut rgb = self.raster.to_rgb8();
        equalize(&mut rgb, &self.histogram)?;
        self.raster = DynamicImage::ImageRgb8(rgb);
        self.applied.push(Op::Equalize);
        Ok(())
    }

    /// Detects edges; the old raster is replaced wholesale by the edge
    /// map. Equalization happens internally first, using the last
    /// computed histogram.
    ///
    /// # Errors
    ///
    /// [`EqualizeError`] as for [`Session::equalize`].
    pub fn detect_edges(&mut self) -> Result<(), EqualizeError> {
        let edges = detect_edges(&self.raster.to_rgb8(), &self.histogram)?;
        self.raster = DynamicImage::ImageRgb8(edges);
        self.applied.push(Op::Edges);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn gradient_raster(w: u32, h: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(w, h, |x, y| {
            #[allow(clippy::cast_possible_truncation)]
            Rgb([(x * 8) as u8, (y * 8) as u8, 64])
        }))
    }

    #[test]
    fn test_new_computes_histogram() {
        let session = Session::new(gradient_raster(16, 16));
        assert_eq!(session.histogram().total(), 256);
        assert!(session.applied().is_empty());
    }

    #[test]
    fn test_luminance_grayscale_refreshes_histogram() {
        let mut session = Session::new(gradient_raster(16, 16));
        session.grayscale_luminance();

        let luma = session.raster().to_luma8();
        assert_eq!(Histogram::from_luma(&luma), *session.histogram());
        assert_eq!(session.applied(), &[Op::GrayscaleLuminance]);
    }

    #[test]
    fn test_device_grayscale_leaves_histogram_stale() {
        let mut session = Session::new(gradient_raster(8, 8));
        let before = session.histogram().clone();
        session.grayscale_device();
        assert_eq!(*session.histogram(), before);
    }

    #[test]
    fn test_equalize_then_edges_flow() {
        let mut session = Session::new(gradient_raster(12, 12));
        session.apply(Op::Equalize).unwrap();
        // Equalize changed pixel values but not dimensions, so the
        // stale histogram still passes the size check.
        session.recompute_histogram();
        session.apply(Op::Edges).unwrap();

        assert_eq!(session.applied(), &[Op::Equalize, Op::Edges]);
        assert_eq!(session.dimensions(), RasterDimensions::new(12, 12));
    }

    #[test]
    fn test_edges_replace_raster_wholesale() {
        let mut session = Session::new(gradient_raster(8, 8));
        session.detect_edges().unwrap();

        // Border ring of the replacement raster is black.
        let rgb = session.raster().to_rgb8();
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(rgb.get_pixel(7, 7).0, [0, 0, 0]);
    }

    #[test]
    fn test_set_histogram_is_checked_at_use() {
        let mut session = Session::new(gradient_raster(8, 8));
        let other = Histogram::from_rgb(&gradient_raster(4, 4).to_rgb8());
        session.set_histogram(other);
        assert_eq!(
            session.equalize(),
            Err(EqualizeError::DimensionMismatch {
                histogram_total: 16,
                raster_pixels: 64,
            })
        );
    }

    #[test]
    fn test_empty_raster_equalize_fails() {
        let mut session = Session::new(DynamicImage::new_rgb8(0, 0));
        assert_eq!(session.equalize(), Err(EqualizeError::EmptyRaster));
        assert!(session.applied().is_empty());
    }
}
