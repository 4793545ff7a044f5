//! Core types for the zticks tick cache reader.
//!
//! This crate provides the fundamental data structures used throughout zticks:
//!
//! - [`RawTick`] - A single 24-byte record from a `.zticks` day file
//! - [`TickSeries`] - One day of zero-filled ticks as parallel arrays
//! - [`Bar`] - A resampled output record (raw tick or OHLC bar)
//! - [`BarInterval`] - Raw ticks or fixed-minute buckets
//! - [`HistoryWindow`] - Closed `[start, end]` request window
//! - [`HistoryRequest`] - Symbol, window, interval and record limit
//! - [`OleDate`] - Host date representation (days since 1899-12-30)
//! - [`DaySource`] - Anything that can load one day of ticks

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/zticks/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bar;
mod days;
mod error;
mod interval;
mod ole;
mod request;
mod source;
mod tick;
mod window;

pub use bar::Bar;
pub use days::{DaySearch, day_from_file_name};
pub use error::{DayLoadError, WindowError, ZticksError};
pub use interval::{BarInterval, BarIntervalParseError};
pub use ole::OleDate;
pub use request::HistoryRequest;
pub use source::DaySource;
pub use tick::{RawTick, TickSeries, zero_fill};
pub use window::HistoryWindow;
