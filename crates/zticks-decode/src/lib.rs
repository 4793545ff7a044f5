//! Day file decoding for the zticks tick cache reader.
//!
//! This crate provides the day file pipeline:
//!
//! - [`path::day_file_path`] - Constructs day file paths
//! - [`decompress::decompress_zticks`] - Gzip decompression
//! - [`parse::parse_ticks`] - Binary tick record parsing
//! - [`read_day_file`] - Full decode of one day into a [`TickSeries`]
//! - [`TickStore`] - A cache directory exposed as a [`DaySource`]
//! - [`encode::write_day_file`] - Writes day files in the same format
//!
//! [`TickSeries`]: zticks_types::TickSeries
//! [`DaySource`]: zticks_types::DaySource

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/zticks/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod decompress;
pub mod encode;
mod parse;
pub mod path;
mod store;

pub use decompress::{DecompressError, SIZE_FACTOR, decompress_zticks};
pub use parse::{decode_ticks, parse_ticks, tick_count, trailing_bytes};
pub use store::{TickStore, read_day_file};
