//! Test support utilities for lumapipe.
//!
//! Provides mocks and synthetic raster builders for testing the
//! lumapipe transformation pipeline.
//!
//! # Example
//!
//! ```
//! use lumapipe_test_support::{MockRasterSource, SyntheticRasterBuilder};
//!
//! // Create synthetic test rasters
//! let flat = SyntheticRasterBuilder::uniform_gray(64, 64, 128);
//! let edgy = SyntheticRasterBuilder::vertical_step(64, 64);
//!
//! // Create a mock raster source
//! let source = MockRasterSource::new(vec![flat, edgy]);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticRasterBuilder;
pub use mocks::MockRasterSource;
