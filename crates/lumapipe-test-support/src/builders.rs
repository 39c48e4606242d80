//! Synthetic raster builders for testing.

use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};
use lumapipe_core::domain::RasterInfo;

/// Builder for creating synthetic test rasters.
///
/// Provides convenience methods for generating rasters with specific
/// characteristics (flat tone, hard edges, skewed histograms, etc.).
pub struct SyntheticRasterBuilder;

impl SyntheticRasterBuilder {
    // === Flat rasters ===

    /// Creates a uniform gray raster (single histogram bin, no edges).
    #[must_use]
    pub fn uniform_gray(width: u32, height: u32, value: u8) -> RasterInfo {
        let img = GrayImage::from_fn(width, height, |_, _| Luma([value]));
        RasterInfo::new("synthetic://uniform_gray", DynamicImage::ImageLuma8(img))
    }

    /// Creates a uniform RGB raster.
    #[must_use]
    pub fn rgb_uniform(width: u32, height: u32, r: u8, g: u8, b: u8) -> RasterInfo {
        let img = RgbImage::from_fn(width, height, |_, _| Rgb([r, g, b]));
        RasterInfo::new("synthetic://rgb_uniform", DynamicImage::ImageRgb8(img))
    }

    // === Edged rasters ===

    /// Creates a raster split into a left and a right half of two gray
    /// values. The single vertical boundary is the only edge.
    #[must_use]
    pub fn vertical_split(width: u32, height: u32, left: u8, right: u8) -> RasterInfo {
        let img = GrayImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                Luma([left])
            } else {
                Luma([right])
            }
        });
        RasterInfo::new("synthetic://vertical_split", DynamicImage::ImageLuma8(img))
    }

    /// Creates a black-to-white vertical step edge.
    #[must_use]
    pub fn vertical_step(width: u32, height: u32) -> RasterInfo {
        Self::vertical_split(width, height, 0, 255)
    }

    /// Creates a high-contrast checkerboard pattern (edges everywhere).
    #[must_use]
    pub fn checkerboard(width: u32, height: u32, cell_size: u32) -> RasterInfo {
        let img = GrayImage::from_fn(width, height, |x, y| {
            if (x / cell_size + y / cell_size) % 2 == 0 {
                Luma([255u8])
            } else {
                Luma([0u8])
            }
        });
        RasterInfo::new("synthetic://checkerboard", DynamicImage::ImageLuma8(img))
    }

    // === Histogram-shaped rasters ===

    /// Creates a smooth horizontal gradient covering the full tonal
    /// range (near-uniform histogram).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn horizontal_gradient(width: u32, height: u32) -> RasterInfo {
        let img = GrayImage::from_fn(width, height, |x, _| {
            let val = ((u32::from(u8::MAX) * x) / width.max(1)) as u8;
            Luma([val])
        });
        RasterInfo::new(
            "synthetic://horizontal_gradient",
            DynamicImage::ImageLuma8(img),
        )
    }

    /// Creates a low-contrast raster confined to a narrow dark band.
    ///
    /// Useful for testing equalization - the output should span far
    /// more of the tonal range than the input.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn low_contrast(width: u32, height: u32) -> RasterInfo {
        let img = GrayImage::from_fn(width, height, |x, y| {
            let val = 40 + ((x + y) % 32) as u8;
            Luma([val])
        });
        RasterInfo::new("synthetic://low_contrast", DynamicImage::ImageLuma8(img))
    }

    // === Special test rasters ===

    /// Creates a 3x3 black raster with a single bright center pixel.
    ///
    /// The smallest raster with an interior for the edge kernels.
    #[must_use]
    pub fn center_impulse(value: u8) -> RasterInfo {
        let img = GrayImage::from_fn(3, 3, |x, y| {
            if x == 1 && y == 1 {
                Luma([value])
            } else {
                Luma([0u8])
            }
        });
        RasterInfo::new("synthetic://center_impulse", DynamicImage::ImageLuma8(img))
    }

    /// Creates a 1x1 pixel raster (edge case).
    #[must_use]
    pub fn single_pixel(value: u8) -> RasterInfo {
        let img = GrayImage::from_fn(1, 1, |_, _| Luma([value]));
        RasterInfo::new("synthetic://1x1", DynamicImage::ImageLuma8(img))
    }

    /// Creates a tiny 2x2 raster with explicit pixel values.
    #[must_use]
    pub fn tiny(values: [[u8; 2]; 2]) -> RasterInfo {
        let mut img = GrayImage::new(2, 2);
        for (y, row) in values.iter().enumerate() {
            for (x, &val) in row.iter().enumerate() {
                #[allow(clippy::cast_possible_truncation)]
                img.put_pixel(x as u32, y as u32, Luma([val]));
            }
        }
        RasterInfo::new("synthetic://2x2", DynamicImage::ImageLuma8(img))
    }
}
