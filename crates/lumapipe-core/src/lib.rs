//! Lumapipe Core - Pixel-level raster analysis and transforms.
//!
//! This crate contains the domain types and transform implementations:
//! luminance histogram computation, histogram equalization, grayscale
//! conversion and Sobel edge detection, plus the session type that
//! threads a raster and its histogram through a sequence of transforms.

pub mod domain;
pub mod modules;
pub mod ports;
pub mod session;

pub use domain::{
    bt601_luma, EqualizeError, Histogram, HistogramSummary, Op, RasterDimensions, RasterInfo,
    TransformReport, BINS,
};
pub use ports::RasterSource;
pub use session::Session;
