//! Raster transform modules.

pub mod equalize;
pub mod grayscale;
pub mod sobel;

pub use equalize::{equalize, Lut};
pub use grayscale::{device_grayscale, luminance_grayscale};
pub use sobel::detect_edges;
