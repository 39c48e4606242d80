//! Progress bar adapter using indicatif.

use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};
use lumapipe_core::TransformReport;

/// Progress reporting for CLI runs.
pub struct ProgressBar {
    bar: Option<IndicatifBar>,
    quiet: bool,
}

impl ProgressBar {
    /// Creates a new progress bar.
    ///
    /// # Arguments
    ///
    /// * `total` - Total number of items, if known
    /// * `quiet` - If true, suppress all output
    /// * `show_bar` - If true, show progress bar; otherwise show per-item status
    #[must_use]
    pub fn new(total: Option<u64>, quiet: bool, show_bar: bool) -> Self {
        if quiet {
            return Self {
                bar: None,
                quiet: true,
            };
        }

        let bar = if show_bar {
            let bar = total.map_or_else(IndicatifBar::new_spinner, IndicatifBar::new);

            if let Ok(style) = ProgressStyle::default_bar().template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            ) {
                bar.set_style(style.progress_chars("#>-"));
            }

            Some(bar)
        } else {
            None
        };

        Self { bar, quiet }
    }

    /// Marks a raster as started.
    pub fn started(&self, path: &str, index: usize, total: Option<usize>) {
        if self.quiet {
            return;
        }
        if let Some(bar) = &self.bar {
            if let Some(t) = total {
                bar.set_length(t as u64);
            }
            bar.set_position(index as u64);
            bar.set_message(path.to_string());
        }
    }

    /// Marks a raster as transformed and written.
    pub fn completed(&self, report: &TransformReport) {
        if self.quiet {
            return;
        }
        if let Some(bar) = &self.bar {
            bar.inc(1);
        } else {
            eprintln!("{}: {} op(s) applied", report.path, report.ops.len());
        }
    }

    /// Marks a raster as skipped with a reason.
    pub fn skipped(&self, path: &str, reason: &str) {
        if self.quiet {
            return;
        }
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
        eprintln!("WARN: Skipping {path}: {reason}");
    }

    /// Marks the whole run as finished.
    pub fn finished(&self, processed: usize, skipped: usize) {
        if self.quiet {
            return;
        }
        if let Some(bar) = &self.bar {
            bar.finish_with_message(format!("Done: {processed} processed, {skipped} skipped"));
        }
    }
}
