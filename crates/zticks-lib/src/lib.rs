//! Reader and backward resampler for cTrader `.zticks` tick caches.
//!
//! This is a facade crate that re-exports functionality from the zticks
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use zticks_lib::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let creds = Credentials::new("ICMarkets", "1234567");
//!     let mut session = Session::login(SessionConfig::default(), &creds)?;
//!
//!     let window = HistoryWindow::new(
//!         "2024-01-01T00:00:00Z".parse()?,
//!         "2024-01-31T23:59:59Z".parse()?,
//!     )?;
//!     let request = HistoryRequest::new("EURUSD", window, BarInterval::from_minutes(60), 500);
//!
//!     for bar in session.history(&request) {
//!         println!("{} {}", bar.ole_time(), bar.close);
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/zticks/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use zticks_types::*;

// Re-export day file decoding
pub use zticks_decode::{
    DecompressError, SIZE_FACTOR, TickStore, decode_ticks, decompress_zticks, encode, parse_ticks,
    path, read_day_file, tick_count, trailing_bytes,
};

// Re-export resampling
pub use zticks_resample::{BackwardAggregator, Cursor, CursorState, DEFAULT_SLACK_DAYS, Resampler};

// Re-export sessions
#[cfg(feature = "session")]
pub use zticks_session::{
    CacheBroker, ConfigError, Credentials, Session, SessionConfig, SessionError,
    default_cache_root,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use zticks_format::{CsvFormatter, FormatError, Formatter, JsonFormatter, JsonStyle, OutputFormat};

#[cfg(all(feature = "format", feature = "parquet"))]
pub use zticks_format::ParquetFormatter;

/// Prelude module for convenient imports.
///
/// ```
/// use zticks_lib::prelude::*;
/// ```
pub mod prelude {
    pub use zticks_types::{
        Bar, BarInterval, DayLoadError, DaySource, HistoryRequest, HistoryWindow, OleDate, RawTick,
        TickSeries, ZticksError,
    };

    pub use zticks_decode::{TickStore, read_day_file};

    pub use zticks_resample::Resampler;

    #[cfg(feature = "session")]
    pub use zticks_session::{CacheBroker, Credentials, Session, SessionConfig};

    #[cfg(feature = "format")]
    pub use zticks_format::{CsvFormatter, Formatter, JsonFormatter, OutputFormat};

    #[cfg(all(feature = "format", feature = "parquet"))]
    pub use zticks_format::ParquetFormatter;
}
