//! Lumapipe Adapters - External adapters for lumapipe.
//!
//! This crate provides adapters for:
//! - Filesystem raster decode and encode
//! - Histogram CSV export and import

pub mod fs;
pub mod histogram_csv;

pub use fs::{load_raster, save_raster, FsRasterSource};
pub use histogram_csv::HistogramCsvError;
