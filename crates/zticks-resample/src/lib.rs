//! Backward tick and bar resampling for the zticks tick cache reader.
//!
//! This crate turns day-by-day tick data into host history records:
//!
//! - [`BackwardAggregator`] - Builds OHLC bars from ticks visited newest-first
//! - [`Cursor`] - Persistent read position with a day-search state machine
//! - [`Resampler`] - Serves history requests from a [`DaySource`]
//!
//! [`DaySource`]: zticks_types::DaySource

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/zticks/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregator;
mod cursor;
mod resampler;

pub use aggregator::BackwardAggregator;
pub use cursor::{Cursor, CursorState};
pub use resampler::{DEFAULT_SLACK_DAYS, Resampler};
