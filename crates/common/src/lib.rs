//! Nightlight Common Utilities
//!
//! Shared infrastructure for all Nightlight crates:
//! - Error types and result aliases
//! - Tracing/logging initialization
//! - Logging and output-path defaults

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
