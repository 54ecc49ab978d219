//! # Host Adapter Error Handling
//!
//! This module defines the HalowError enum, which represents the failures
//! that can occur while reading host state (the radio's country parameter,
//! debugfs rate tables, the `morse_cli` diagnostic tool).
//!
//! The channel mapping core never produces these: unmapped countries and
//! missing channels are represented as `None` there.

use std::path::PathBuf;

use thiserror::Error;

/// Represents the different error types that can occur in the host adapters.
#[derive(Debug, Error)]
pub enum HalowError {
    /// Indicates a host file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Indicates the radio has no country configured.
    #[error("Country code unavailable: {0}")]
    CountryUnavailable(String),

    /// Indicates the diagnostic command could not be run.
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// Indicates the configuration file is malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HalowError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HalowError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for HalowError {
    fn from(err: serde_json::Error) -> Self {
        HalowError::Config(err.to_string())
    }
}
