//! Error types for the wifi-hal-scanner crate.
//!
//! Only construction can fail. Once a [`crate::HalWifiScanner`] exists, every
//! backend failure is reported through the operation's own return value
//! (`bool` or `Option`) and never through these types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a scanner.
#[derive(Debug, Error)]
pub enum ScannerError {
    /// The HAL driver handle is not open.
    #[error("WiFi HAL driver handle is not available")]
    DriverUnavailable,

    /// The scanner configuration was rejected.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from loading or validating a [`crate::ScannerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be written.
    #[error("Failed to write config file {path}: {source}")]
    FileWrite {
        /// Path that was being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A field holds a value outside its allowed range.
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The config JSON could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Shorthand for [`ConfigError::InvalidValue`].
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }
}
