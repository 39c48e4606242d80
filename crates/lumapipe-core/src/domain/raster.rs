//! Raster types shared across the pipeline.

use image::{DynamicImage, GenericImageView, GrayImage, RgbImage};
use serde::{Deserialize, Serialize};

/// Image dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RasterDimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl RasterDimensions {
    /// Creates dimensions from width and height.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count.
    #[must_use]
    pub const fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// A decoded raster with its source identification.
///
/// The decode step is external to the core; adapters construct this
/// from whatever container format they understand.
#[derive(Debug, Clone)]
pub struct RasterInfo {
    /// Source path or identifier.
    pub path: String,
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// Decoded pixel data.
    pub image: DynamicImage,
}

impl RasterInfo {
    /// Creates raster info from a decoded image.
    #[must_use]
    pub fn new(path: impl Into<String>, image: DynamicImage) -> Self {
        let (width, height) = image.dimensions();
        Self {
            path: path.into(),
            width,
            height,
            image,
        }
    }

    /// Returns the dimensions of the raster.
    #[must_use]
    pub const fn dimensions(&self) -> RasterDimensions {
        RasterDimensions::new(self.width, self.height)
    }

    /// Converts to an 8-bit RGB view, allocating if needed.
    #[must_use]
    pub fn to_rgb8(&self) -> RgbImage {
        self.image.to_rgb8()
    }

    /// Converts to an 8-bit grayscale view, allocating if needed.
    #[must_use]
    pub fn to_luma8(&self) -> GrayImage {
        self.image.to_luma8()
    }

    /// Derives the display name from the source path: the file stem
    /// without directories or extension.
    #[must_use]
    pub fn name(&self) -> &str {
        let base = self
            .path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.path.as_str());
        base.rsplit_once('.').map_or(base, |(stem, _)| stem)
    }
}
