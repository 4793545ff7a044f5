//! Resampled output record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::OleDate;

/// One output record of a history request.
///
/// In raw-tick mode every field except `spread` carries the ask price and
/// `volume` is 1. In bar mode the record covers one bucket: `close_ms` and
/// `close` come from the latest tick of the bucket, `open` from the earliest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Timestamp of the closing tick, milliseconds since the Unix epoch.
    #[serde(rename = "timestamp_ms")]
    pub close_ms: i64,
    /// Opening price (earliest tick's ask).
    pub open: f64,
    /// Highest ask in the bar.
    pub high: f64,
    /// Lowest ask in the bar.
    pub low: f64,
    /// Closing price (latest tick's ask).
    pub close: f64,
    /// Spread (ask - bid) of the earliest tick in the bar.
    pub spread: f64,
    /// Number of raw ticks aggregated.
    pub volume: u32,
}

impl Bar {
    /// Creates a new bar.
    #[must_use]
    pub const fn new(
        close_ms: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        spread: f64,
        volume: u32,
    ) -> Self {
        Self {
            close_ms,
            open,
            high,
            low,
            close,
            spread,
            volume,
        }
    }

    /// Creates a degenerate single-price bar for one raw tick.
    #[must_use]
    pub const fn from_tick(close_ms: i64, price: f64, spread: f64) -> Self {
        Self::new(close_ms, price, price, price, price, spread, 1)
    }

    /// Returns the close time as a UTC timestamp.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.close_ms)
    }

    /// Returns the close time in OLE Automation date format.
    #[must_use]
    pub fn ole_time(&self) -> OleDate {
        OleDate::from_millis(self.close_ms)
    }

    /// Returns the price range (high - low).
    #[must_use]
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the body size (|close - open|).
    #[must_use]
    pub fn body(&self) -> f64 {
        (self.close - self.open).abs()
    }

    /// Returns true if this is a bullish (green) bar.
    #[must_use]
    pub fn is_bullish(&self) -> bool {
        self.close > self.open
    }

    /// Returns true if this is a bearish (red) bar.
    #[must_use]
    pub fn is_bearish(&self) -> bool {
        self.close < self.open
    }
}
