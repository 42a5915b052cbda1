//! Error types shared across Nightlight crates.

use std::path::PathBuf;

/// Top-level error type for Nightlight operations.
#[derive(Debug, thiserror::Error)]
pub enum NightlightError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error(
        "Overlay {overlay_width}x{overlay_height} does not fit inside background \
         {background_width}x{background_height}"
    )]
    OverlayTooLarge {
        overlay_width: u32,
        overlay_height: u32,
        background_width: u32,
        background_height: u32,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to write image {path}: {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using NightlightError.
pub type NightlightResult<T> = Result<T, NightlightError>;

impl NightlightError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn decode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Decode {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether the error happened while reading inputs, i.e. before any output.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::FileNotFound { .. } | Self::Decode { .. })
    }
}
