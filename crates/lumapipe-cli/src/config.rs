//! Configuration file support for lumapipe.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/lumapipe/config.toml` (lowest priority)
//! - Project-local: `.lumapipe.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Histogram persistence settings.
    pub histogram: HistogramConfig,
    /// Output settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
}

/// Histogram persistence configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct HistogramConfig {
    /// Export the final histogram CSV for every run.
    pub export: Option<bool>,
    /// Target file for histogram export.
    pub file: Option<PathBuf>,
}

/// Output configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory for transformed rasters.
    pub dir: Option<PathBuf>,
    /// Report format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/lumapipe/config.toml`
    /// 2. Project-local: `.lumapipe.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load XDG config (lowest priority)
        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        // Load project-local config (higher priority, merged)
        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        // Validate merged config
        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), String> {
        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                return Err(format!(
                    "output.format must be 'json' or 'jsonl', got '{f}'"
                ));
            }
        }
        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        // General
        self.general.recursive = other.general.recursive.or(self.general.recursive);

        // Histogram
        self.histogram.export = other.histogram.export.or(self.histogram.export);
        self.histogram.file = other.histogram.file.or_else(|| self.histogram.file.take());

        // Output
        self.output.dir = other.output.dir.or_else(|| self.output.dir.take());
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("lumapipe").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.lumapipe.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".lumapipe.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.general.recursive.is_none());
        assert!(config.histogram.export.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = "";
        let config: AppConfig = toml::from_str(toml).expect("parse empty config");
        assert!(config.general.recursive.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r"
[general]
recursive = true

[histogram]
export = true
file = 'hist/latest.csv'

[output]
dir = 'out'
format = 'json'
pretty = true
progress = false
";
        let config: AppConfig = toml::from_str(toml).expect("parse full config");

        assert_eq!(config.general.recursive, Some(true));
        assert_eq!(config.histogram.export, Some(true));
        assert_eq!(config.histogram.file, Some(PathBuf::from("hist/latest.csv")));
        assert_eq!(config.output.dir, Some(PathBuf::from("out")));
        assert_eq!(config.output.format, Some("json".to_string()));
        assert_eq!(config.output.pretty, Some(true));
        assert_eq!(config.output.progress, Some(false));
    }

    #[test]
    fn test_merge_override_wins() {
        let mut base: AppConfig = toml::from_str(
            r"
[general]
recursive = false

[output]
format = 'json'
pretty = true
",
        )
        .expect("parse base");

        let override_config: AppConfig = toml::from_str(
            r"
[general]
recursive = true

[output]
format = 'jsonl'
",
        )
        .expect("parse override");

        base.merge(override_config);

        assert_eq!(base.general.recursive, Some(true));
        assert_eq!(base.output.format, Some("jsonl".to_string()));
        // Pretty preserved from base
        assert_eq!(base.output.pretty, Some(true));
    }

    #[test]
    fn test_merge_empty_override_preserves_base() {
        let mut base: AppConfig = toml::from_str(
            r"
[histogram]
export = true
",
        )
        .expect("parse base");

        base.merge(AppConfig::default());

        assert_eq!(base.histogram.export, Some(true));
    }

    #[test]
    fn test_invalid_toml_syntax_handled() {
        let toml = r"
[output
format = 'json'
"; // Missing closing bracket
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err(), "invalid TOML should return error");
    }

    #[test]
    fn test_validate_output_format_invalid() {
        let mut config = AppConfig::default();
        config.output.format = Some("xml".to_string());

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("output.format"));
    }

    #[test]
    fn test_validate_empty_config_passes() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }
}
