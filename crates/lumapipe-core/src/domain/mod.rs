//! Core domain types for the raster transform pipeline.

mod error;
mod histogram;
mod raster;
mod report;

pub use error::EqualizeError;
pub use histogram::{bt601_luma, Histogram, BINS};
pub use raster::{RasterDimensions, RasterInfo};
pub use report::{HistogramSummary, Op, TransformReport};
