//! Filesystem adapter for loading and saving rasters.

use anyhow::{Context, Result};
use lumapipe_core::{RasterInfo, RasterSource};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Supported raster extensions.
const RASTER_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "tiff", "tif", "webp", "bmp", "gif"];

/// Filesystem raster source adapter.
pub struct FsRasterSource {
    paths: Vec<PathBuf>,
    recursive: bool,
}

impl FsRasterSource {
    /// Creates a new filesystem raster source.
    ///
    /// # Arguments
    ///
    /// * `paths` - Files or directories to scan
    /// * `recursive` - Whether to recurse into subdirectories
    #[must_use]
    pub const fn new(paths: Vec<PathBuf>, recursive: bool) -> Self {
        Self { paths, recursive }
    }

    /// Collects all raster files from the configured paths.
    ///
    /// Directories named on the command line are always scanned one
    /// level deep; deeper levels only with `recursive`.
    fn collect_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut pending: Vec<PathBuf> = Vec::new();

        for path in &self.paths {
            if path.is_file() {
                if is_supported_raster(path) {
                    files.push(path.clone());
                } else {
                    warn!("Unsupported file type: {}", path.display());
                }
            } else if path.is_dir() {
                pending.push(path.clone());
            } else {
                warn!("Path does not exist: {}", path.display());
            }
        }

        while let Some(dir) = pending.pop() {
            let entries = match std::fs::read_dir(&dir) {
                Ok(e) => e,
                Err(e) => {
                    warn!("Failed to read directory {}: {e}", dir.display());
                    continue;
                }
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_file() && is_supported_raster(&path) {
                    files.push(path);
                } else if path.is_dir() && self.recursive {
                    pending.push(path);
                }
            }
        }

        files.sort();
        files
    }
}

impl RasterSource for FsRasterSource {
    fn rasters(&self) -> Box<dyn Iterator<Item = Result<RasterInfo>> + Send + '_> {
        let files = self.collect_files();
        debug!("Found {} raster files", files.len());

        Box::new(files.into_iter().map(|path| load_raster(&path)))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.collect_files().len())
    }
}

/// Checks if a path has a supported raster extension.
fn is_supported_raster(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .is_some_and(|e| RASTER_EXTENSIONS.contains(&e.as_str()))
}

/// Loads and decodes a raster from the filesystem.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded.
pub fn load_raster(path: &Path) -> Result<RasterInfo> {
    let image =
        image::open(path).with_context(|| format!("Failed to open image: {}", path.display()))?;

    Ok(RasterInfo::new(path.to_string_lossy(), image))
}

/// Encodes and writes a raster, format chosen by the target extension.
///
/// Overwrites any existing file; there is no partial-write recovery.
///
/// # Errors
///
/// Returns an error if the format is unknown or the write fails.
pub fn save_raster(image: &image::DynamicImage, path: &Path) -> Result<()> {
    image
        .save(path)
        .with_context(|| format!("Failed to save image: {}", path.display()))?;
    debug!("Saved raster to {}", path.display());
    Ok(())
}
