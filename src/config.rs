//! Advisor configuration module.
//!
//! Handles loading, validating, and merging `image-advisor.toml`. Stock
//! defaults are overridden by the config file, and the config file is
//! overridden by command-line flags.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source = "sample_test"       # Directory of images to analyze
//!
//! [batch]
//! on_decode_error = "abort"    # "abort" or "skip"
//!
//! [report]
//! format = "text"              # "text" or "json"
//! ```
//!
//! The quality thresholds are not configurable; they are fixed in
//! [`Thresholds::STANDARD`](crate::advice::Thresholds::STANDARD).
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "image-advisor.toml";

/// Directory analyzed when neither the config nor the CLI names one.
pub const DEFAULT_SOURCE: &str = "sample_test";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Advisor configuration loaded from `image-advisor.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdvisorConfig {
    /// Directory of images to analyze.
    pub source: String,
    /// Per-file failure handling.
    pub batch: BatchConfig,
    /// Report output settings.
    pub report: ReportConfig,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            batch: BatchConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl AdvisorConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.trim().is_empty() {
            return Err(ConfigError::Validation("source must not be empty".into()));
        }
        Ok(())
    }
}

/// What to do when an image file cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnDecodeError {
    /// Stop the batch and exit with an error.
    #[default]
    Abort,
    /// Log a warning, record the file as skipped, and continue.
    Skip,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    pub on_decode_error: OnDecodeError,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// One block per image, printed as soon as it is analyzed.
    #[default]
    Text,
    /// A single JSON document after the whole batch.
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(AdvisorConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<AdvisorConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: AdvisorConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the file at `path`, falling back to stock defaults when
/// the file does not exist.
pub fn load_config(path: &Path) -> Result<AdvisorConfig, ConfigError> {
    let overlay = load_raw_config(path)?;
    if overlay.is_some() {
        log::debug!("loaded config from {}", path.display());
    }
    resolve_config(stock_defaults_value(), overlay)
}

/// Returns a fully-commented stock `image-advisor.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Image Advisor Configuration
# ===========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Command-line flags override them.
# Unknown keys will cause an error.
#
# The quality thresholds are fixed and cannot be changed here:
#   brightness  80 - 150
#   contrast    >= 30
#   sharpness   >= 400   (Laplacian variance)
#   noise       <= 50
#   focus       >= 500   (Laplacian variance)

# Directory of images to analyze (.png, .jpg, .jpeg; not recursive)
source = "sample_test"

# ---------------------------------------------------------------------------
# Batch
# ---------------------------------------------------------------------------
[batch]
# What to do when an image cannot be decoded:
#   "abort" - stop and exit with an error
#   "skip"  - warn, skip the file, and continue
on_decode_error = "abort"

# ---------------------------------------------------------------------------
# Report
# ---------------------------------------------------------------------------
[report]
# "text" prints one block per image as it is analyzed.
# "json" prints a single JSON document after the batch.
format = "text"
"##
}
