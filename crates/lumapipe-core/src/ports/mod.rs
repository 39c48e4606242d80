//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the domain core and
//! external adapters.

mod raster_source;

pub use raster_source::RasterSource;
