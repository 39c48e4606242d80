//! Sobel edge detection.
//!
//! Convolves the two 3×3 Sobel kernels over the blue channel of a
//! pre-equalized raster and writes the normalized gradient magnitude.
//! Equalization happens internally on a working copy: edge detection is
//! always performed on a contrast-equalized image, a coupling inherited
//! from the pipeline's original contract and kept deliberately.
//!
//! Sampling only the blue channel is safe because the equalized image
//! is grayscale (all channels equal).

use image::{Rgb, RgbImage};

use crate::domain::{EqualizeError, Histogram};
use crate::modules::equalize::equalize;

/// Horizontal gradient kernel.
pub const GX: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
/// Vertical gradient kernel.
pub const GY: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Theoretical maximum gradient magnitude for one 8-bit band:
/// sqrt(((255*4)^2)*2) ≈ 1443.
const MAX_GRADIENT: f64 = 1443.0;

/// Detects edges, producing a new raster of identical dimensions.
///
/// Border pixels (the outer 1-pixel ring) stay at the default black;
/// only interior pixels are computed. Rasters narrower or shorter than
/// 3 pixels come back entirely black. The gradient magnitude is
/// normalized by `1443 * 255` and truncated, then replicated across
/// R, G and B so the edge map reads as true grayscale.
///
/// # Errors
///
/// Propagates [`EqualizeError`] from the internal equalization pass.
pub fn detect_edges(image: &RgbImage, histogram: &Histogram) -> Result<RgbImage, EqualizeError> {
    let mut equalized = image.clone();
    equalize(&mut equalized, histogram)?;

    let (w, h) = equalized.dimensions();
    let mut edges = RgbImage::new(w, h);
    if w < 3 || h < 3 {
        return Ok(edges);
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut ix = 0i32;
            let mut iy = 0i32;
            for (row, (gx_row, gy_row)) in GX.iter().zip(GY.iter()).enumerate() {
                for (col, (&gx, &gy)) in gx_row.iter().zip(gy_row.iter()).enumerate() {
                    #[allow(clippy::cast_possible_truncation)]
                    let (nx, ny) = (x + col as u32 - 1, y + row as u32 - 1);
                    let blue = i32::from(equalized.get_pixel(nx, ny).0[2]);
                    ix += gx * blue;
                    iy += gy * blue;
                }
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let magnitude = {
                let length = f64::from(ix * ix + iy * iy).sqrt();
                (length / MAX_GRADIENT * 255.0) as u8
            };
            edges.put_pixel(x, y, Rgb([magnitude, magnitude, magnitude]));
        }
    }

    Ok(edges)
}
