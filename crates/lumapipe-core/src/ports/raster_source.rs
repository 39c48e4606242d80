//! Raster source port for loading images from various sources.

use crate::domain::RasterInfo;

/// Port for supplying decoded rasters.
///
/// The decode step (file format, container handling) lives behind this
/// boundary; the core only ever sees pixel data.
pub trait RasterSource: Send + Sync {
    /// Returns an iterator over rasters from this source.
    ///
    /// # Errors
    ///
    /// Individual items may be errors if a raster fails to decode.
    fn rasters(&self) -> Box<dyn Iterator<Item = anyhow::Result<RasterInfo>> + Send + '_>;

    /// Returns the total number of rasters, if known.
    fn count_hint(&self) -> Option<usize>;
}
