//! OLE Automation date conversion.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Days between 1899-12-30 and 1970-01-01.
const UNIX_EPOCH_DAYS: f64 = 25_569.0;

/// Milliseconds per day.
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A timestamp as fractional days since 1899-12-30 00:00 UTC.
///
/// This is the `DATE` representation used by trading hosts that talk to the
/// cache reader. `25569.0` is 1970-01-01 and `0.5` of a day is noon.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OleDate(f64);

impl OleDate {
    /// Wraps a raw OLE date value.
    #[must_use]
    pub const fn new(days: f64) -> Self {
        Self(days)
    }

    /// Converts milliseconds since the Unix epoch.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self(UNIX_EPOCH_DAYS + millis as f64 / MILLIS_PER_DAY)
    }

    /// Converts a UTC timestamp.
    #[must_use]
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_millis(dt.timestamp_millis())
    }

    /// Returns the raw day count.
    #[must_use]
    pub const fn days(&self) -> f64 {
        self.0
    }

    /// Converts back to milliseconds since the Unix epoch, rounded to the
    /// nearest millisecond.
    #[must_use]
    pub fn to_millis(&self) -> i64 {
        ((self.0 - UNIX_EPOCH_DAYS) * MILLIS_PER_DAY).round() as i64
    }

    /// Converts to a UTC timestamp.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if !self.0.is_finite() {
            return None;
        }
        DateTime::from_timestamp_millis(self.to_millis())
    }

    /// Returns the calendar day this date falls on.
    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        self.to_datetime().map(|dt| dt.date_naive())
    }
}

impl std::fmt::Display for OleDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.8}", self.0)
    }
}
