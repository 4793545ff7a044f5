//! Session and configuration errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a session configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config file '{path}': {source}")]
    ParseJson {
        /// The path that could not be parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// A tick scale is zero, negative or not finite.
    #[error("Invalid tick scale {value} for {symbol}")]
    InvalidTickScale {
        /// Symbol the scale was configured for, or `default`.
        symbol: String,
        /// The rejected value.
        value: f64,
    },
}

/// Errors that can occur while establishing a session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// No cache root was configured and none could be derived.
    #[error("Failed to determine the cache root directory")]
    NoCacheRoot,

    /// The resolved account cache directory does not exist.
    #[error("Cache directory '{path}' not found")]
    CacheNotFound {
        /// The resolved cache directory.
        path: PathBuf,
    },

    /// Failed to list a cache directory.
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;
