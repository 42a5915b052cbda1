//! Application configuration.
//!
//! Nightlight has no config file. These types carry the defaults the CLI
//! and library fall back to when a caller leaves a value unspecified.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default file name for the composite output.
pub const DEFAULT_COMPOSITE_PATH: &str = "ready_for_ai_composite.png";

/// Default file name for the mask output.
pub const DEFAULT_MASK_PATH: &str = "ready_for_ai_mask.png";

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "nightlight_compositor=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Plain logging at `debug` when verbose, `info` otherwise.
    pub fn for_verbosity(verbose: bool) -> Self {
        Self {
            level: if verbose { "debug" } else { "info" }.to_string(),
            ..Self::default()
        }
    }
}

/// Destinations for the two pipeline outputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPaths {
    /// Composite image (written without alpha).
    pub composite: PathBuf,

    /// Grayscale mask image.
    pub mask: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            composite: PathBuf::from(DEFAULT_COMPOSITE_PATH),
            mask: PathBuf::from(DEFAULT_MASK_PATH),
        }
    }
}

impl OutputPaths {
    /// Build output paths, filling unspecified ones with the defaults.
    pub fn new(composite: Option<PathBuf>, mask: Option<PathBuf>) -> Self {
        let defaults = Self::default();
        Self {
            composite: composite.unwrap_or(defaults.composite),
            mask: mask.unwrap_or(defaults.mask),
        }
    }

    /// Default file names placed inside `dir`.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            composite: dir.join(DEFAULT_COMPOSITE_PATH),
            mask: dir.join(DEFAULT_MASK_PATH),
        }
    }
}
