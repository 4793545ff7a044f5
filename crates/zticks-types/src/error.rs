//! Error types for zticks.

use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors returned to a host driving the history contract.
#[derive(Error, Debug)]
pub enum ZticksError {
    /// History was requested before a session was established.
    #[error("Session not initialized: log in before requesting history")]
    SessionNotInitialized,
}

/// Reasons a single day of ticks is unavailable.
///
/// None of these abort a history walk: the caller moves on to the previous
/// calendar day.
#[derive(Error, Debug)]
pub enum DayLoadError {
    /// No file exists for the day (weekend, holiday, not cached).
    #[error("Tick data file {} not found", path.display())]
    NotFound {
        /// The expected file path.
        path: PathBuf,
    },

    /// The file exists but could not be opened or read.
    #[error("Error opening file {}: {source}", path.display())]
    Open {
        /// The file path.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The gzip stream is corrupt or truncated.
    #[error("Decompression error in {}: {reason}", path.display())]
    Decode {
        /// The file path.
        path: PathBuf,
        /// Description of the decoding failure.
        reason: String,
    },
}

impl DayLoadError {
    /// Returns true for the benign "no file for this day" case.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns the path of the day file involved.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::Open { path, .. } | Self::Decode { path, .. } => path,
        }
    }
}

/// Error for invalid history windows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowError {
    /// Start is after end.
    #[error("Invalid history window: {start} > {end}")]
    InvalidRange {
        /// The window start.
        start: DateTime<Utc>,
        /// The window end.
        end: DateTime<Utc>,
    },

    /// An OLE date could not be represented as a UTC timestamp.
    #[error("Date {0} is out of range")]
    OutOfRange(f64),
}
