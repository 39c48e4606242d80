//! Mock implementations of core port traits.

use std::sync::{Arc, Mutex, PoisonError};

use lumapipe_core::domain::RasterInfo;
use lumapipe_core::ports::RasterSource;

/// Mock implementation of `RasterSource` for testing.
///
/// Yields pre-built rasters and tracks iteration for assertions.
pub struct MockRasterSource {
    rasters: Vec<RasterInfo>,
    iteration_count: Arc<Mutex<usize>>,
}

impl MockRasterSource {
    /// Creates a new mock source with the given rasters.
    #[must_use]
    pub fn new(rasters: Vec<RasterInfo>) -> Self {
        Self {
            rasters,
            iteration_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Creates an empty mock source.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns the number of times the source has been iterated.
    #[must_use]
    pub fn iteration_count(&self) -> usize {
        *self
            .iteration_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl RasterSource for MockRasterSource {
    fn rasters(&self) -> Box<dyn Iterator<Item = anyhow::Result<RasterInfo>> + Send + '_> {
        let count = Arc::clone(&self.iteration_count);
        if let Ok(mut c) = count.lock() {
            *c += 1;
        }
        Box::new(self.rasters.iter().cloned().map(Ok))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.rasters.len())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_raster_source_empty() {
        let source = MockRasterSource::empty();
        assert_eq!(source.count_hint(), Some(0));
        assert_eq!(source.rasters().count(), 0);
        assert_eq!(source.iteration_count(), 1);
    }

    #[test]
    fn test_mock_raster_source_with_rasters() {
        let img = image::DynamicImage::new_rgb8(100, 100);
        let info = RasterInfo::new("test.jpg", img);
        let source = MockRasterSource::new(vec![info]);

        assert_eq!(source.count_hint(), Some(1));
        assert_eq!(source.rasters().count(), 1);
    }
}
